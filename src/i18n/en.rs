use super::content::*;

pub static EN: Content = Content {
    nav: Nav {
        about: "About",
        benefits: "Benefits",
        products: "Products",
        why_us: "Why Us",
        faq: "FAQ",
        partners: "Partners",
        contact: "Contact",
        toggle_menu: "Toggle menu",
    },
    hero: Hero {
        title: "HIBORG",
        subtitle: "Professional Grade Tools",
        description: "Own brand of quality tools from \"Territory of Tools\" company",
        cta: "View Catalog",
        cta_secondary: "Contact Us",
        years: "Years Experience",
        clients: "Clients",
        scroll_hint: "Scroll down",
    },
    about: About {
        title: "About HIBORG Brand",
        description: "HIBORG is a proprietary tool brand developed by \"Territory of Tools\" company. We create reliable tools for professionals and home craftsmen.",
        mission: "Our mission is to provide quality tools at affordable prices to every craftsman in Belarus.",
        values: AboutValues {
            quality: Card {
                title: "Quality",
                description: "Strict control at every production stage",
            },
            reliability: Card {
                title: "Reliability",
                description: "Tools you can trust",
            },
            affordability: Card {
                title: "Affordability",
                description: "Professional quality at reasonable prices",
            },
        },
    },
    benefits: Benefits {
        title: "HIBORG Benefits",
        items: &[
            Card {
                title: "Professional Quality",
                description: "Tools made from high-quality materials",
            },
            Card {
                title: "Manufacturer Warranty",
                description: "Official warranty on all products",
            },
            Card {
                title: "Affordable Prices",
                description: "Optimal price-quality ratio",
            },
            Card {
                title: "Wide Range",
                description: "Over 500 tool items",
            },
        ],
    },
    products: Products {
        title: "Product Catalog",
        description: "Wide selection of tools for any task",
        categories: &[
            Category { name: "Hand Tools", count: "150+" },
            Category { name: "Power Tools", count: "80+" },
            Category { name: "Fasteners", count: "200+" },
            Category { name: "Accessories", count: "100+" },
            Category { name: "Safety Equipment", count: "50+" },
            Category { name: "Workwear", count: "40+" },
        ],
        cta: "Go to Catalog",
    },
    showcase: Showcase {
        title: "Our Products",
        subtitle: "Quality tools for professionals",
        previous: "Previous",
        next: "Next",
        go_to_slide: "Go to slide",
        items: &[
            ShowcaseItem { image: "/assets/images/products/knife.png", name: "Utility Knife" },
            ShowcaseItem { image: "/assets/images/products/drills-hss.png", name: "HSS Metal Drill Bits" },
            ShowcaseItem { image: "/assets/images/products/drill-concrete.png", name: "SDS+ Concrete Drill" },
            ShowcaseItem { image: "/assets/images/products/mallet-rubber.png", name: "Rubber Mallet" },
            ShowcaseItem { image: "/assets/images/products/mallet-plastic.png", name: "Plastic Head Mallet" },
            ShowcaseItem { image: "/assets/images/products/crowbar.png", name: "Crowbar" },
            ShowcaseItem { image: "/assets/images/products/sealant-gun.png", name: "Sealant Gun" },
        ],
    },
    why_us: WhyUs {
        title: "Why Choose HIBORG?",
        reasons: &[
            Card {
                title: "Own Brand",
                description: "Full quality and pricing control",
            },
            Card {
                title: "Direct Supply",
                description: "Working directly with manufacturers",
            },
            Card {
                title: "Technical Support",
                description: "Tool selection consulting",
            },
            Card {
                title: "Fast Delivery",
                description: "Delivery across Belarus",
            },
        ],
    },
    faq: Faq {
        title: "Frequently Asked Questions",
        subtitle: "Answers to common questions about our products",
        items: &[
            FaqEntry {
                question: "What warranty does HIBORG offer on tools?",
                answer: "All HIBORG products come with official manufacturer warranty. Warranty period depends on product category and ranges from 6 months to 2 years. Warranty service is provided through our official service center.",
            },
            FaqEntry {
                question: "How does delivery work across Belarus?",
                answer: "We deliver across all of Belarus. Delivery to Minsk takes 1-2 business days, to regions — 2-5 business days. Self-pickup from our Minsk warehouse is available. Free delivery is offered for orders above a certain amount.",
            },
            FaqEntry {
                question: "Can I return a product?",
                answer: "Yes, you can return products of proper quality within 14 days of purchase if the product appearance and packaging are preserved. Defective products are subject to replacement or refund according to Belarus legislation.",
            },
            FaqEntry {
                question: "Where are HIBORG tools manufactured?",
                answer: "HIBORG tools are manufactured at certified factories in Asia under strict quality control of our company. Each batch undergoes inspection before shipping to Belarus. We guarantee that all products meet declared specifications.",
            },
            FaqEntry {
                question: "Do you offer wholesale prices?",
                answer: "Yes, we offer special conditions for wholesale buyers and corporate clients. Contact our sales department to receive a personalized commercial offer.",
            },
            FaqEntry {
                question: "How can I get help choosing the right tool?",
                answer: "Our specialists are ready to help you choose the right tool. Call us, send a message, or fill out the contact form on the website. We will find the optimal solution for your tasks and budget.",
            },
        ],
    },
    testimonials: Testimonials {
        title: "Customer Reviews",
        subtitle: "What our customers say about us",
        items: &[
            Testimonial {
                name: "Alexander Petrov",
                role: "Builder, Sole Proprietor",
                text: "Been using HIBORG tools for over a year. Excellent quality for reasonable price. Especially pleased with metal drill bits — work great, stay sharp for long.",
                rating: 5,
                avatar: "АП",
            },
            Testimonial {
                name: "Sergey Ivanov",
                role: "Repair Specialist",
                text: "Ordered mallets and crowbars for my workshop. Fast delivery, quality products. Recommend to anyone looking for reliable tools without overpaying.",
                rating: 5,
                avatar: "СИ",
            },
            Testimonial {
                name: "Victor Kozlov",
                role: "Foreman, StroyMaster LLC",
                text: "We purchase HIBORG tools for our team. Price-quality ratio is excellent. Managers are always available, help with selection. Will continue cooperation.",
                rating: 5,
                avatar: "ВК",
            },
            Testimonial {
                name: "Dmitry Novikov",
                role: "DIY Enthusiast",
                text: "Bought a set for home repairs. Everything neatly packaged, tools comfortable to hold. No complaints after six months of use.",
                rating: 4,
                avatar: "ДН",
            },
            Testimonial {
                name: "Mikhail Sidorov",
                role: "Electrician",
                text: "Excellent utility knives! Use them every day at work. Mechanism is reliable, blades are sharp. Buying for the third time already.",
                rating: 5,
                avatar: "МС",
            },
            Testimonial {
                name: "Andrey Volkov",
                role: "Auto Shop Owner",
                text: "Purchased concrete drills and sealant guns for our auto shop. Quality is top-notch, prices are fair. Manager Olga helped with wholesale order.",
                rating: 5,
                avatar: "АВ",
            },
        ],
    },
    partners: Partners {
        title: "Our Partners",
        description: "Working with industry-leading brands",
        where_to_buy: "Where to Buy",
        where_to_buy_desc: "HIBORG products are available in partner stores across Belarus",
        main_site: "Main Website",
    },
    contact: Contact {
        title: "Contact Us",
        description: "Ready to answer your questions",
        form: ContactFormLabels {
            name: "Your Name",
            email: "Email",
            phone: "Phone",
            message: "Message",
            submit: "Send Request",
            sent: "Sent!",
        },
        info: ContactInfo {
            address: "Office Address",
            address_value: "Minsk, Prytytskaga str., 160",
            warehouse: "Warehouse Address",
            warehouse_value: "Minsk, Akademika Zhebraka str., 25",
            phones: "Phones",
            email: "Email",
        },
        mail: MailTemplate {
            subject: "Request from the HIBORG website",
            greeting: "Hello! I would like to get in touch.",
            name: "Name",
            email: "Email",
            phone: "Phone",
            message: "Message",
        },
    },
    cookie: Cookie {
        text: "We use cookies to improve your experience. By continuing to use this site, you agree to our",
        policy_link: "privacy policy",
        accept: "Accept",
        decline: "Decline",
        close: "Close",
        policy_title: "Privacy Policy",
        policy: &[
            PolicySection {
                heading: "1. General Provisions",
                body: "This privacy policy defines the procedure for processing personal data of users of the hiborg.by website, owned by \"Territory of Tools\" LLC.",
                bullets: &[],
            },
            PolicySection {
                heading: "2. What Data We Collect",
                body: "When using the site, we may collect the following data:",
                bullets: &[
                    "Name and contact details (when filling out the contact form)",
                    "Email and phone number",
                    "Technical information (IP address, browser type, cookies)",
                ],
            },
            PolicySection {
                heading: "3. Purposes of Data Processing",
                body: "Collected data is used for:",
                bullets: &[
                    "Responding to user inquiries",
                    "Improving service quality",
                    "Statistical analysis of site visits",
                ],
            },
            PolicySection {
                heading: "4. Data Protection",
                body: "We take necessary technical and organizational measures to protect your personal data from unauthorized access.",
                bullets: &[],
            },
            PolicySection {
                heading: "5. Cookies",
                body: "The site uses cookies to ensure proper operation and content personalization. You can disable cookies in your browser settings.",
                bullets: &[],
            },
            PolicySection {
                heading: "6. User Rights",
                body: "You have the right to request information about your personal data, its modification or deletion by contacting us at info@tiski.by.",
                bullets: &[],
            },
            PolicySection {
                heading: "7. Contacts",
                body: "For questions related to personal data processing, contact:",
                bullets: &["Email: info@tiski.by", "Phone: (017) 362-98-99"],
            },
        ],
    },
    floating: Floating {
        toggle: "Contact options",
        whatsapp: "WhatsApp",
        call: "Call us",
    },
    footer: Footer {
        company: "LLC \"Territory of Tools\"",
        rights: "All rights reserved",
        main_site: "Main Website",
        privacy: "Privacy Policy",
    },
};
