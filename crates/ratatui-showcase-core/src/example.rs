use pulldown_cmark::CodeBlockKind;
use pulldown_cmark::CowStr;
use pulldown_cmark::Event;
use pulldown_cmark::Options;
use pulldown_cmark::Parser;
use pulldown_cmark::Tag;
use pulldown_cmark::TagEnd;

/// One labeled source variant of the displayed sample.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Example {
    pub language: String,
    pub source: String,
}

/// The ordered examples owned by one showcase instance.
///
/// Order is document order, uniqueness is by language tag with the first
/// occurrence winning. An empty set is not an error; the enclosing widget
/// simply renders no interactive controls.
#[derive(Clone, Debug, Default)]
pub struct ExampleSet {
    examples: Vec<Example>,
}

impl ExampleSet {
    /// Extracts one example per fenced code block, labeling each with the
    /// normalized fence language. Fences without a usable language and
    /// indented code blocks are skipped.
    pub fn parse(markdown: &str) -> Self {
        let mut examples: Vec<Example> = Vec::new();
        let mut current: Option<Example> = None;

        for ev in Parser::new_ext(markdown, Options::empty()) {
            match ev {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let language = match kind {
                        CodeBlockKind::Fenced(info) => normalize_fence_lang(&info),
                        CodeBlockKind::Indented => None,
                    };
                    current = language.map(|language| Example {
                        language,
                        source: String::new(),
                    });
                }
                Event::Text(text) => {
                    if let Some(example) = current.as_mut() {
                        example.source.push_str(&text);
                    }
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(example) = current.take()
                        && !examples.iter().any(|e| e.language == example.language)
                    {
                        examples.push(example);
                    }
                }
                _ => {}
            }
        }

        Self { examples }
    }

    pub fn from_examples(examples: impl IntoIterator<Item = Example>) -> Self {
        let mut out: Vec<Example> = Vec::new();
        for example in examples {
            if !out.iter().any(|e| e.language == example.language) {
                out.push(example);
            }
        }
        Self { examples: out }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Example> {
        self.examples.iter()
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.examples.iter().map(|e| e.language.as_str())
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn get(&self, language: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.language == language)
    }

    pub fn first(&self) -> Option<&Example> {
        self.examples.first()
    }

    /// Whether framework-selection controls may ever be shown.
    pub fn has_multiple_frameworks(&self) -> bool {
        // Languages are unique by construction, so the count is the
        // distinct-language count.
        self.examples.len() > 1
    }
}

fn normalize_fence_lang(info: &CowStr<'_>) -> Option<String> {
    let first = info.trim().split_whitespace().next().unwrap_or("");
    let first = first.split(',').next().unwrap_or("").trim();
    let first = first.strip_prefix("language-").unwrap_or(first);
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_VARIANTS: &str = "```html\n<button>Accent</button>\n```\n\n```jsx\nexport default () => <button>Accent</button>;\n```\n";

    #[test]
    fn parses_one_example_per_fenced_block_in_document_order() {
        let set = ExampleSet::parse(TWO_VARIANTS);
        assert_eq!(
            set.languages().collect::<Vec<_>>(),
            vec!["html", "jsx"]
        );
        assert_eq!(
            set.get("html").map(|e| e.source.as_str()),
            Some("<button>Accent</button>\n")
        );
        assert!(set.has_multiple_frameworks());
    }

    #[test]
    fn strips_language_prefix_from_fence_info() {
        let set = ExampleSet::parse("```language-html\n<p>hi</p>\n```\n");
        assert_eq!(set.languages().collect::<Vec<_>>(), vec!["html"]);
    }

    #[test]
    fn first_occurrence_wins_for_duplicate_languages() {
        let md = "```html\nfirst\n```\n\n```html\nsecond\n```\n";
        let set = ExampleSet::parse(md);
        assert_eq!(set.len(), 1);
        assert_eq!(set.first().map(|e| e.source.as_str()), Some("first\n"));
    }

    #[test]
    fn skips_unlabeled_and_indented_blocks() {
        let md = "```\nno tag\n```\n\n    indented\n";
        let set = ExampleSet::parse(md);
        assert!(set.is_empty());
        assert!(!set.has_multiple_frameworks());
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(ExampleSet::parse("").is_empty());
    }

    #[test]
    fn from_examples_deduplicates_like_the_parser() {
        let set = ExampleSet::from_examples([
            Example {
                language: "html".to_string(),
                source: "first".to_string(),
            },
            Example {
                language: "html".to_string(),
                source: "second".to_string(),
            },
            Example {
                language: "jsx".to_string(),
                source: "third".to_string(),
            },
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("html").map(|e| e.source.as_str()), Some("first"));
    }

    #[test]
    fn single_language_is_not_multi_framework() {
        let set = ExampleSet::parse("```html\n<p>hi</p>\n```\n");
        assert!(!set.has_multiple_frameworks());
    }
}
