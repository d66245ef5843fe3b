use super::content::*;

pub static RU: Content = Content {
    nav: Nav {
        about: "О бренде",
        benefits: "Преимущества",
        products: "Продукция",
        why_us: "Почему мы",
        faq: "Вопросы",
        partners: "Партнёры",
        contact: "Контакты",
        toggle_menu: "Открыть меню",
    },
    hero: Hero {
        title: "HIBORG",
        subtitle: "Инструмент профессионального уровня",
        description: "Собственный бренд качественного инструмента от компании «Территория инструмента»",
        cta: "Смотреть каталог",
        cta_secondary: "Связаться с нами",
        years: "Лет опыта",
        clients: "Клиентов",
        scroll_hint: "Листайте вниз",
    },
    about: About {
        title: "О бренде HIBORG",
        description: "HIBORG — собственный бренд инструмента, разработанный компанией «Территория инструмента». Мы создаём надёжный инструмент для профессионалов и домашних мастеров.",
        mission: "Наша миссия — сделать качественный инструмент доступным для каждого мастера в Беларуси.",
        values: AboutValues {
            quality: Card {
                title: "Качество",
                description: "Строгий контроль на каждом этапе производства",
            },
            reliability: Card {
                title: "Надёжность",
                description: "Инструмент, которому можно доверять",
            },
            affordability: Card {
                title: "Доступность",
                description: "Профессиональное качество по разумной цене",
            },
        },
    },
    benefits: Benefits {
        title: "Преимущества HIBORG",
        items: &[
            Card {
                title: "Профессиональное качество",
                description: "Инструмент из высококачественных материалов",
            },
            Card {
                title: "Гарантия производителя",
                description: "Официальная гарантия на всю продукцию",
            },
            Card {
                title: "Доступные цены",
                description: "Оптимальное соотношение цены и качества",
            },
            Card {
                title: "Широкий ассортимент",
                description: "Более 500 позиций инструмента",
            },
        ],
    },
    products: Products {
        title: "Каталог продукции",
        description: "Широкий выбор инструмента для любых задач",
        categories: &[
            Category { name: "Ручной инструмент", count: "150+" },
            Category { name: "Электроинструмент", count: "80+" },
            Category { name: "Крепёж", count: "200+" },
            Category { name: "Расходные материалы", count: "100+" },
            Category { name: "Средства защиты", count: "50+" },
            Category { name: "Спецодежда", count: "40+" },
        ],
        cta: "Перейти в каталог",
    },
    showcase: Showcase {
        title: "Наша продукция",
        subtitle: "Качественные инструменты для профессионалов",
        previous: "Назад",
        next: "Вперёд",
        go_to_slide: "Перейти к слайду",
        items: &[
            ShowcaseItem { image: "/assets/images/products/knife.png", name: "Нож с выдвижным лезвием" },
            ShowcaseItem { image: "/assets/images/products/drills-hss.png", name: "Свёрла HSS по металлу" },
            ShowcaseItem { image: "/assets/images/products/drill-concrete.png", name: "Бур по бетону SDS+" },
            ShowcaseItem { image: "/assets/images/products/mallet-rubber.png", name: "Киянка резиновая" },
            ShowcaseItem { image: "/assets/images/products/mallet-plastic.png", name: "Киянка с пластиковым бойком" },
            ShowcaseItem { image: "/assets/images/products/crowbar.png", name: "Гвоздодёр" },
            ShowcaseItem { image: "/assets/images/products/sealant-gun.png", name: "Пистолет для герметика" },
        ],
    },
    why_us: WhyUs {
        title: "Почему выбирают HIBORG?",
        reasons: &[
            Card {
                title: "Собственный бренд",
                description: "Полный контроль качества и цены",
            },
            Card {
                title: "Прямые поставки",
                description: "Работаем напрямую с производителями",
            },
            Card {
                title: "Техническая поддержка",
                description: "Консультации по подбору инструмента",
            },
            Card {
                title: "Быстрая доставка",
                description: "Доставка по всей Беларуси",
            },
        ],
    },
    faq: Faq {
        title: "Часто задаваемые вопросы",
        subtitle: "Ответы на популярные вопросы о нашей продукции",
        items: &[
            FaqEntry {
                question: "Какая гарантия на инструменты HIBORG?",
                answer: "На всю продукцию HIBORG предоставляется официальная гарантия производителя. Срок гарантии зависит от категории товара и составляет от 6 месяцев до 2 лет. Гарантийное обслуживание осуществляется через официальный сервисный центр.",
            },
            FaqEntry {
                question: "Как осуществляется доставка по Беларуси?",
                answer: "Мы осуществляем доставку по всей территории Беларуси. Доставка в Минск — 1-2 рабочих дня, в регионы — 2-5 рабочих дней. Возможен самовывоз со склада в Минске. При заказе от определённой суммы доставка бесплатная.",
            },
            FaqEntry {
                question: "Можно ли вернуть товар?",
                answer: "Да, вы можете вернуть товар надлежащего качества в течение 14 дней с момента покупки при сохранении товарного вида и упаковки. Товар ненадлежащего качества подлежит замене или возврату в соответствии с законодательством РБ.",
            },
            FaqEntry {
                question: "Где производятся инструменты HIBORG?",
                answer: "Инструменты HIBORG производятся на сертифицированных заводах в Азии под строгим контролем качества нашей компании. Каждая партия проходит проверку перед отправкой в Беларусь. Мы гарантируем соответствие всей продукции заявленным характеристикам.",
            },
            FaqEntry {
                question: "Есть ли у вас оптовые цены?",
                answer: "Да, мы предлагаем специальные условия для оптовых покупателей и корпоративных клиентов. Свяжитесь с нашим отделом продаж для получения индивидуального коммерческого предложения.",
            },
            FaqEntry {
                question: "Как получить консультацию по подбору инструмента?",
                answer: "Наши специалисты готовы помочь вам с подбором инструмента. Позвоните нам по телефону, напишите в мессенджер или заполните форму обратной связи на сайте. Мы подберём оптимальное решение под ваши задачи и бюджет.",
            },
        ],
    },
    testimonials: Testimonials {
        title: "Отзывы клиентов",
        subtitle: "Что говорят о нас наши клиенты",
        items: &[
            Testimonial {
                name: "Александр Петров",
                role: "Строитель, ИП",
                text: "Пользуюсь инструментами HIBORG уже более года. Отличное качество за разумные деньги. Особенно порадовали свёрла по металлу — работают отлично, не тупятся долго.",
                rating: 5,
                avatar: "АП",
            },
            Testimonial {
                name: "Сергей Иванов",
                role: "Мастер по ремонту",
                text: "Заказывал киянки и гвоздодёры для мастерской. Доставка быстрая, товар качественный. Рекомендую всем, кто ищет надёжный инструмент без переплат.",
                rating: 5,
                avatar: "СИ",
            },
            Testimonial {
                name: "Виктор Козлов",
                role: "Прораб, ООО \"СтройМастер\"",
                text: "Закупаем инструменты HIBORG для бригады. Соотношение цена-качество отличное. Менеджеры всегда на связи, помогают с подбором. Будем продолжать сотрудничество.",
                rating: 5,
                avatar: "ВК",
            },
            Testimonial {
                name: "Дмитрий Новиков",
                role: "Домашний мастер",
                text: "Купил набор для домашних работ. Всё аккуратно упаковано, инструменты удобные в руке. За полгода использования нареканий нет.",
                rating: 4,
                avatar: "ДН",
            },
            Testimonial {
                name: "Михаил Сидоров",
                role: "Электрик",
                text: "Отличные ножи с выдвижным лезвием! Пользуюсь каждый день на работе. Механизм надёжный, лезвия острые. Беру уже третий раз.",
                rating: 5,
                avatar: "МС",
            },
            Testimonial {
                name: "Андрей Волков",
                role: "Владелец СТО",
                text: "Для нашего автосервиса закупили буры по бетону и пистолеты для герметика. Качество на высоте, цены адекватные. Менеджер Ольга помогла с оптовым заказом.",
                rating: 5,
                avatar: "АВ",
            },
        ],
    },
    partners: Partners {
        title: "Наши партнёры",
        description: "Сотрудничаем с ведущими брендами отрасли",
        where_to_buy: "Где купить",
        where_to_buy_desc: "Продукция HIBORG представлена в магазинах партнёров по всей Беларуси",
        main_site: "Основной сайт",
    },
    contact: Contact {
        title: "Свяжитесь с нами",
        description: "Готовы ответить на ваши вопросы",
        form: ContactFormLabels {
            name: "Ваше имя",
            email: "Email",
            phone: "Телефон",
            message: "Сообщение",
            submit: "Отправить заявку",
            sent: "Отправлено!",
        },
        info: ContactInfo {
            address: "Адрес офиса",
            address_value: "г. Минск, ул. Притыцкого, 160",
            warehouse: "Адрес склада",
            warehouse_value: "г. Минск, ул. Академика Жебрака, 25",
            phones: "Телефоны",
            email: "Email",
        },
        mail: MailTemplate {
            subject: "Заявка с сайта HIBORG",
            greeting: "Здравствуйте! Хочу связаться с вами.",
            name: "Имя",
            email: "Email",
            phone: "Телефон",
            message: "Сообщение",
        },
    },
    cookie: Cookie {
        text: "Мы используем файлы cookie для улучшения работы сайта. Продолжая использовать сайт, вы соглашаетесь с нашей",
        policy_link: "политикой конфиденциальности",
        accept: "Принять",
        decline: "Отклонить",
        close: "Закрыть",
        policy_title: "Политика конфиденциальности",
        policy: &[
            PolicySection {
                heading: "1. Общие положения",
                body: "Настоящая политика конфиденциальности определяет порядок обработки персональных данных пользователей сайта hiborg.by, принадлежащего ООО «Территория инструмента».",
                bullets: &[],
            },
            PolicySection {
                heading: "2. Какие данные мы собираем",
                body: "При использовании сайта мы можем собирать следующие данные:",
                bullets: &[
                    "Имя и контактные данные (при заполнении формы обратной связи)",
                    "Email и номер телефона",
                    "Техническая информация (IP-адрес, тип браузера, cookies)",
                ],
            },
            PolicySection {
                heading: "3. Цели обработки данных",
                body: "Собранные данные используются для:",
                bullets: &[
                    "Ответа на запросы пользователей",
                    "Улучшения качества обслуживания",
                    "Статистического анализа посещаемости",
                ],
            },
            PolicySection {
                heading: "4. Защита данных",
                body: "Мы принимаем необходимые технические и организационные меры для защиты ваших персональных данных от несанкционированного доступа.",
                bullets: &[],
            },
            PolicySection {
                heading: "5. Файлы cookie",
                body: "Сайт использует cookie-файлы для обеспечения корректной работы и персонализации контента. Вы можете отключить использование cookies в настройках браузера.",
                bullets: &[],
            },
            PolicySection {
                heading: "6. Права пользователей",
                body: "Вы имеете право запросить информацию о ваших персональных данных, их изменение или удаление, связавшись с нами по адресу info@tiski.by.",
                bullets: &[],
            },
            PolicySection {
                heading: "7. Контакты",
                body: "По вопросам, связанным с обработкой персональных данных, обращайтесь:",
                bullets: &["Email: info@tiski.by", "Телефон: (017) 362-98-99"],
            },
        ],
    },
    floating: Floating {
        toggle: "Способы связи",
        whatsapp: "WhatsApp",
        call: "Позвонить",
    },
    footer: Footer {
        company: "ООО «Территория инструмента»",
        rights: "Все права защищены",
        main_site: "Основной сайт",
        privacy: "Политика конфиденциальности",
    },
};
