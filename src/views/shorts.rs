//! Shorts carousel cursor

/// Position and play state over a fixed-length list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortsCursor {
    index: usize,
    len: usize,
    playing: bool,
}

impl ShortsCursor {
    /// `None` for an empty list
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            index: 0,
            len,
            playing: true,
        })
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
        self.playing = true;
    }

    pub fn previous(&mut self) {
        self.index = if self.index > 0 {
            self.index - 1
        } else {
            self.len - 1
        };
        self.playing = true;
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_cursor() {
        assert_eq!(ShortsCursor::new(0), None);
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut cursor = ShortsCursor::new(3).unwrap();
        cursor.next();
        cursor.next();
        assert_eq!(cursor.index(), 2);
        cursor.next();
        assert_eq!(cursor.index(), 0);
        cursor.previous();
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_index_stays_in_range() {
        let mut cursor = ShortsCursor::new(3).unwrap();
        for step in 0..20 {
            if step % 3 == 0 {
                cursor.previous();
            } else {
                cursor.next();
            }
            assert!(cursor.index() < 3);
        }
    }

    #[test]
    fn test_navigation_resumes_playback() {
        let mut cursor = ShortsCursor::new(3).unwrap();
        cursor.toggle_play();
        assert!(!cursor.is_playing());
        cursor.next();
        assert!(cursor.is_playing());

        cursor.toggle_play();
        cursor.previous();
        assert!(cursor.is_playing());
    }
}
