//! Porter stemmer for English tokens.
//!
//! Works on lowercase ASCII words. Words of two letters or fewer, and words
//! containing anything other than `a-z`, are returned unchanged.

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Reduces an English word to its Porter stem.
pub fn stem(word: &str) -> String {
    if word.len() <= 2 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return word.to_string();
    }

    let mut w = Word {
        b: word.as_bytes().to_vec(),
        j: 0,
    };
    w.step1ab();
    if w.b.len() > 1 {
        w.step1c();
        w.step2();
        w.step3();
        w.step4();
        w.step5();
    }

    // Only ASCII letters ever enter the buffer.
    String::from_utf8(w.b).unwrap_or_else(|_| word.to_string())
}

/// Working buffer. `j` is the length of the stem left after the suffix
/// most recently matched by `ends`.
struct Word {
    b: Vec<u8>,
    j: usize,
}

impl Word {
    fn cons(&self, i: usize) -> bool {
        match self.b[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.cons(i - 1),
            _ => true,
        }
    }

    /// Number of VC sequences in `b[..len]`.
    fn measure(&self, len: usize) -> usize {
        let mut n = 0;
        let mut i = 0;
        while i < len && self.cons(i) {
            i += 1;
        }
        loop {
            while i < len && !self.cons(i) {
                i += 1;
            }
            if i >= len {
                return n;
            }
            while i < len && self.cons(i) {
                i += 1;
            }
            n += 1;
        }
    }

    fn vowel_in(&self, len: usize) -> bool {
        (0..len).any(|i| !self.cons(i))
    }

    fn double_cons(&self, i: usize) -> bool {
        i >= 1 && self.b[i] == self.b[i - 1] && self.cons(i)
    }

    /// consonant-vowel-consonant ending at `i`, where the last consonant is not w, x or y.
    fn cvc(&self, i: usize) -> bool {
        if i < 2 || !self.cons(i) || self.cons(i - 1) || !self.cons(i - 2) {
            return false;
        }
        !matches!(self.b[i], b'w' | b'x' | b'y')
    }

    fn ends(&mut self, suffix: &str) -> bool {
        if self.b.ends_with(suffix.as_bytes()) {
            self.j = self.b.len() - suffix.len();
            true
        } else {
            false
        }
    }

    fn set_to(&mut self, replacement: &str) {
        self.b.truncate(self.j);
        self.b.extend_from_slice(replacement.as_bytes());
    }

    fn replace_if_measured(&mut self, replacement: &str) {
        if self.measure(self.j) > 0 {
            self.set_to(replacement);
        }
    }

    fn last(&self) -> usize {
        self.b.len() - 1
    }

    /// Plurals and -ed / -ing.
    fn step1ab(&mut self) {
        if self.b.last() == Some(&b's') {
            if self.ends("sses") {
                self.b.truncate(self.b.len() - 2);
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.b.len() >= 2 && self.b[self.b.len() - 2] != b's' {
                self.b.pop();
            }
        }

        if self.ends("eed") {
            if self.measure(self.j) > 0 {
                self.b.pop();
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in(self.j) {
            self.b.truncate(self.j);
            if self.b.is_empty() {
                return;
            }
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_cons(self.last()) {
                if !matches!(self.b[self.last()], b'l' | b's' | b'z') {
                    self.b.pop();
                }
            } else if self.measure(self.b.len()) == 1 && self.cvc(self.last()) {
                self.b.push(b'e');
            }
        }
    }

    /// Terminal y to i when there is another vowel in the stem.
    fn step1c(&mut self) {
        if self.ends("y") && self.vowel_in(self.j) {
            let last = self.last();
            self.b[last] = b'i';
        }
    }

    fn step2(&mut self) {
        if let Some(&(_, to)) = STEP2_RULES.iter().find(|(from, _)| self.ends(from)) {
            self.replace_if_measured(to);
        }
    }

    fn step3(&mut self) {
        if let Some(&(_, to)) = STEP3_RULES.iter().find(|(from, _)| self.ends(from)) {
            self.replace_if_measured(to);
        }
    }

    /// Strips -ant, -ence etc. in context <c>vcvc<v>.
    fn step4(&mut self) {
        for suffix in STEP4_SUFFIXES {
            if !self.ends(suffix) {
                continue;
            }
            if *suffix == "ion" && !(self.j >= 1 && matches!(self.b[self.j - 1], b's' | b't')) {
                continue;
            }
            if self.measure(self.j) > 1 {
                self.b.truncate(self.j);
            }
            return;
        }
    }

    /// Final -e and -ll.
    fn step5(&mut self) {
        let len = self.b.len();
        if self.b[len - 1] == b'e' {
            let m = self.measure(len);
            if m > 1 || (m == 1 && !self.cvc(len - 2)) {
                self.b.pop();
            }
        }
        let last = self.last();
        if self.b[last] == b'l' && self.double_cons(last) && self.measure(last + 1) > 1 {
            self.b.pop();
        }
    }
}
