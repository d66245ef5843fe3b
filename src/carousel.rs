/// Position in a looping carousel of `len` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Out-of-range targets leave the position unchanged.
    pub fn go_to(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }

    /// Previous, current and next slide, wrapping at both ends.
    pub fn visible(&self) -> Option<[usize; 3]> {
        if self.is_empty() {
            return None;
        }
        Some([self.prev().index, self.index, self.next().index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let c = Carousel::new(7);
        assert_eq!(c.prev().index(), 6);
        assert_eq!(c.prev().next().index(), 0);
        assert_eq!(c.go_to(6).next().index(), 0);
    }

    #[test]
    fn visible_window() {
        let c = Carousel::new(7);
        assert_eq!(c.visible(), Some([6, 0, 1]));
        assert_eq!(c.go_to(3).visible(), Some([2, 3, 4]));
        assert_eq!(Carousel::new(1).visible(), Some([0, 0, 0]));
        assert_eq!(Carousel::new(0).visible(), None);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let c = Carousel::new(3).go_to(1);
        assert_eq!(c.go_to(3).index(), 1);
        assert_eq!(c.go_to(2).index(), 2);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let c = Carousel::new(0);
        assert_eq!(c.next(), c);
        assert_eq!(c.prev(), c);
        assert_eq!(c.go_to(0), c);
    }
}
