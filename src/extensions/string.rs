pub trait CharPairs {
    /// Returns the consecutive (first, second) character pairs of `self`
    /// in order, or `None` when the character count is odd and the tail
    /// cannot pair up.
    fn char_pairs(&self) -> Option<Vec<(char, char)>>;
}

impl CharPairs for str {
    fn char_pairs(&self) -> Option<Vec<(char, char)>> {
        let mut pairs = Vec::with_capacity(self.len() / 2);
        let mut chars = self.chars();
        while let Some(first) = chars.next() {
            match chars.next() {
                Some(second) => pairs.push((first, second)),
                None => return None,
            }
        }
        Some(pairs)
    }
}

impl CharPairs for String {
    fn char_pairs(&self) -> Option<Vec<(char, char)>> {
        self.as_str().char_pairs()
    }
}
