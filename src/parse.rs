use super::decomposition::normalize_nfc_whitespace;
use super::nickname::strip_nickname;
use super::segment::Segments;
use super::surname;
use super::title;
use smallvec::SmallVec;

/// The structured parts of a free-text name.
///
/// Parsing is best-effort and never fails: a single word is a given name
/// with no surname, and input with no words at all yields empty parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    pub given: String,
    pub middle: Vec<String>,
    pub surname: String,
}

/// Parses a name written as "Given Middle Surname" or "Surname, Given
/// Middle", ignoring nicknames, titles and generational suffixes.
///
/// ```
/// use name_gender::parse::parse;
///
/// let parts = parse("Dr. Jan Willem 'Wim' van der Berg Jr.");
/// assert_eq!("Jan", parts.given);
/// assert_eq!(vec!["Willem".to_string()], parts.middle);
/// assert_eq!("van der Berg", parts.surname);
///
/// let parts = parse("Vasilescu, Bogdan");
/// assert_eq!("Bogdan", parts.given);
/// assert_eq!("Vasilescu", parts.surname);
/// ```
pub fn parse(name: &str) -> NameParts {
    let normalized = normalize_nfc_whitespace(name);
    let stripped = strip_nickname(&normalized);

    let mut op = ParseOp {
        words: SmallVec::new(),
        surname_index: 0,
        stripped_title: false,
    };
    op.run(&stripped);
    op.into_parts()
}

#[derive(Debug)]
struct ParseOp<'a> {
    words: SmallVec<[&'a str; 7]>,
    surname_index: usize,
    stripped_title: bool,
}

impl<'a> ParseOp<'a> {
    fn run(&mut self, name: &'a str) {
        let parts: SmallVec<[&str; 3]> = name
            .split(',')
            .filter(|part| Segments::from_text(part).next().is_some())
            .collect();

        match parts.len() {
            0 => {}
            1 => self.handle_no_comma(parts[0]),
            _ => {
                if Segments::from_text(parts[1]).all(title::is_postfix_title) {
                    // Comma-separated suffix, as in "John Smith, Jr."
                    self.handle_no_comma(parts[0]);
                } else {
                    // Sort-ordered, as in "Smith, John"; anything after a
                    // second comma is a suffix
                    self.handle_surname_first(parts[0], parts[1]);
                }
            }
        }
    }

    fn handle_no_comma(&mut self, text: &'a str) {
        self.words.extend(Segments::from_text(text));
        self.strip_titles();

        self.surname_index = if self.stripped_title && self.words.len() == 1 {
            // "Mr. Smith" names a surname, not a given name
            0
        } else {
            surname::find_surname_index(&self.words)
        };
    }

    fn handle_surname_first(&mut self, surname_part: &'a str, given_part: &'a str) {
        self.words.extend(Segments::from_text(given_part));
        self.strip_titles();

        self.surname_index = self.words.len();
        self.words.extend(Segments::from_text(surname_part));
    }

    fn strip_titles(&mut self) {
        // Check for title as prefix (e.g. "Dr. John Smith" or "Prof. Dr.
        // John Smith")
        let prefix_len = title::find_prefix_len(&self.words);
        if prefix_len > 0 {
            self.stripped_title = true;
            self.words.drain(0..prefix_len);
        }

        // Strip non-comma-separated titles & suffixes (e.g. "John Smith Jr."),
        // but never the first word
        if self.words.len() > 2 {
            let first_postfix_index = title::find_postfix_index(&self.words[1..]) + 1;
            self.words.truncate(first_postfix_index);
        }
    }

    fn into_parts(self) -> NameParts {
        if self.words.is_empty() {
            return NameParts::default();
        }

        let surname_index = self.surname_index.min(self.words.len());
        if surname_index == 0 {
            return NameParts {
                given: String::new(),
                middle: Vec::new(),
                surname: self.words.join(" "),
            };
        }

        NameParts {
            given: self.words[0].to_string(),
            middle: self.words[1..surname_index]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            surname: self.words[surname_index..].join(" "),
        }
    }
}
