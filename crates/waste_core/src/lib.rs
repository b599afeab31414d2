use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Waste category assigned to an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Recyclable,
    Compostable,
    #[serde(rename = "Non-Recyclable")]
    NonRecyclable,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 3] = [
        Category::Recyclable,
        Category::Compostable,
        Category::NonRecyclable,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Recyclable => "Recyclable",
            Category::Compostable => "Compostable",
            Category::NonRecyclable => "Non-Recyclable",
        }
    }

    pub fn disposal_tip(self) -> &'static str {
        disposal_tip(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advice shown next to a classification.
pub fn disposal_tip(category: Category) -> &'static str {
    match category {
        Category::Recyclable => "Rinse containers before recycling",
        Category::Compostable => "Remove non-organic attachments",
        Category::NonRecyclable => "Dispose in general waste bin",
    }
}

/// Confidence percentage in [0, 100) at hundredth resolution.
///
/// Stored as whole hundredths so the rendered value always has exactly two
/// decimals and never rounds up to `100.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Confidence(u16);

impl Confidence {
    /// Exclusive upper bound in hundredths of a percent.
    pub const UPPER: u16 = 10_000;

    pub fn from_hundredths(hundredths: u16) -> Option<Self> {
        (hundredths < Self::UPPER).then_some(Self(hundredths))
    }

    pub fn hundredths(self) -> u16 {
        self.0
    }

}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("confidence of {0} hundredths is not below 100%")]
pub struct ConfidenceOutOfRange(pub u16);

impl TryFrom<u16> for Confidence {
    type Error = ConfidenceOutOfRange;

    fn try_from(hundredths: u16) -> Result<Self, Self::Error> {
        Self::from_hundredths(hundredths).ok_or(ConfidenceOutOfRange(hundredths))
    }
}

impl From<Confidence> for u16 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

/// Outcome of a single classification run. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub confidence: Confidence,
}

impl ClassificationResult {
    pub fn disposal_tip(&self) -> &'static str {
        self.category.disposal_tip()
    }

    /// Builds the block shown in the result area.
    pub fn render(&self) -> ResultFragment {
        ResultFragment {
            heading: RESULT_HEADING,
            lines: [
                ResultLine {
                    label: "Category",
                    value: self.category.label().to_string(),
                },
                ResultLine {
                    label: "Confidence",
                    value: self.confidence.to_string(),
                },
                ResultLine {
                    label: "Disposal Tip",
                    value: self.disposal_tip().to_string(),
                },
            ],
        }
    }
}

pub const RESULT_HEADING: &str = "Classification Result";

/// One labeled line of a rendered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub label: &'static str,
    pub value: String,
}

/// Rendered result: a heading followed by category, confidence and tip lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFragment {
    pub heading: &'static str,
    pub lines: [ResultLine; 3],
}

impl fmt::Display for ResultFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heading)?;
        for line in &self.lines {
            write!(f, "\n{}: {}", line.label, line.value)?;
        }
        Ok(())
    }
}

/// The area of the window that holds the latest result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultDisplay {
    fragment: Option<ResultFragment>,
}

impl ResultDisplay {
    pub fn fragment(&self) -> Option<&ResultFragment> {
        self.fragment.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.fragment.is_none()
    }

    /// Overwrites whatever was shown before.
    pub fn show(&mut self, fragment: ResultFragment) {
        self.fragment = Some(fragment);
    }

}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("Please select an image first!")]
    MissingInput,
}

/// Blocking, user-facing notification sink.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

impl<F: FnMut(&str)> Notifier for F {
    fn alert(&mut self, message: &str) {
        self(message)
    }
}

/// Anything that can assign a category to an image file.
pub trait Classifier {
    fn classify(&mut self, image: &Path) -> ClassificationResult;
}

/// Placeholder classifier: uniform random category and confidence.
///
/// The image itself is never opened.
pub struct MockClassifier<R = StdRng> {
    rng: R,
}

impl MockClassifier<StdRng> {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, otherwise from entropy.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for MockClassifier<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Classifier for MockClassifier<R> {
    fn classify(&mut self, _image: &Path) -> ClassificationResult {
        let category = Category::ALL[self.rng.random_range(0..Category::ALL.len())];
        // independent draw from the category pick
        let confidence = Confidence(self.rng.random_range(0..Confidence::UPPER));
        ClassificationResult {
            category,
            confidence,
        }
    }
}

/// Classify the selected file, failing when nothing is selected.
pub fn classify_selection<C>(
    selection: Option<&Path>,
    classifier: &mut C,
) -> Result<ClassificationResult, ClassifyError>
where
    C: Classifier + ?Sized,
{
    let image = selection.ok_or(ClassifyError::MissingInput)?;
    let result = classifier.classify(image);
    tracing::info!(
        file = %image.display(),
        category = %result.category,
        confidence = %result.confidence,
        "classified image"
    );
    Ok(result)
}

/// Click handler for the classify button.
///
/// Without a selection the notifier is alerted and `display` is left as it
/// was. Otherwise `display` is replaced with the freshly rendered result.
pub fn handle_classify_click<C, N>(
    selection: Option<&Path>,
    classifier: &mut C,
    display: &mut ResultDisplay,
    notifier: &mut N,
) where
    C: Classifier + ?Sized,
    N: Notifier + ?Sized,
{
    match classify_selection(selection, classifier) {
        Ok(result) => display.show(result.render()),
        Err(err) => notifier.alert(&err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn looks_like_percentage(text: &str) -> bool {
        let Some(number) = text.strip_suffix('%') else {
            return false;
        };
        let Some((whole, frac)) = number.split_once('.') else {
            return false;
        };
        (1..=2).contains(&whole.len())
            && frac.len() == 2
            && whole.chars().all(|c| c.is_ascii_digit())
            && frac.chars().all(|c| c.is_ascii_digit())
    }

    #[rstest]
    #[case(Category::Recyclable, "Rinse containers before recycling")]
    #[case(Category::Compostable, "Remove non-organic attachments")]
    #[case(Category::NonRecyclable, "Dispose in general waste bin")]
    fn disposal_tip_matches_table(#[case] category: Category, #[case] tip: &str) {
        assert_eq!(disposal_tip(category), tip);
        assert_eq!(category.disposal_tip(), tip);
    }

    #[test]
    fn every_category_has_a_tip() {
        for category in Category::ALL {
            assert!(!disposal_tip(category).is_empty());
        }
    }

    #[rstest]
    #[case(Category::Recyclable, "Recyclable")]
    #[case(Category::Compostable, "Compostable")]
    #[case(Category::NonRecyclable, "Non-Recyclable")]
    fn category_labels(#[case] category: Category, #[case] label: &str) {
        assert_eq!(category.label(), label);
        assert_eq!(category.to_string(), label);
    }

    #[rstest]
    #[case(0, "0.00%")]
    #[case(5, "0.05%")]
    #[case(120, "1.20%")]
    #[case(4207, "42.07%")]
    #[case(9999, "99.99%")]
    fn confidence_formats_two_decimals(#[case] hundredths: u16, #[case] expected: &str) {
        let confidence = Confidence::from_hundredths(hundredths).unwrap();
        assert_eq!(confidence.to_string(), expected);
        assert!(looks_like_percentage(expected));
    }

    #[test]
    fn confidence_rejects_one_hundred_percent() {
        assert!(Confidence::from_hundredths(10_000).is_none());
        assert!(Confidence::from_hundredths(u16::MAX).is_none());
    }

    #[test]
    fn confidence_deserialization_keeps_the_range() {
        let ok: Confidence = serde_json::from_str("4207").unwrap();
        assert_eq!(ok.to_string(), "42.07%");
        assert!(serde_json::from_str::<Confidence>("10000").is_err());
        assert!(serde_json::from_str::<Confidence>("65535").is_err());
    }

    #[test]
    fn classification_result_rejects_out_of_range_confidence() {
        let bad = r#"{"category":"Compostable","confidence":65535}"#;
        assert!(serde_json::from_str::<ClassificationResult>(bad).is_err());

        let good = r#"{"category":"Non-Recyclable","confidence":9999}"#;
        let result: ClassificationResult = serde_json::from_str(good).unwrap();
        assert_eq!(result.category, Category::NonRecyclable);
        assert_eq!(result.confidence.to_string(), "99.99%");
        assert_eq!(serde_json::to_string(&result).unwrap(), good);
    }

    #[test]
    fn render_produces_heading_and_three_lines() {
        let result = ClassificationResult {
            category: Category::Compostable,
            confidence: Confidence::from_hundredths(5012).unwrap(),
        };
        let fragment = result.render();
        assert_eq!(fragment.heading, "Classification Result");
        let labels: Vec<_> = fragment.lines.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Category", "Confidence", "Disposal Tip"]);
        assert_eq!(
            fragment.to_string(),
            "Classification Result\n\
             Category: Compostable\n\
             Confidence: 50.12%\n\
             Disposal Tip: Remove non-organic attachments"
        );
    }

    #[test]
    fn mock_classifier_is_deterministic_for_a_seed() {
        let image = PathBuf::from("bottle.jpg");
        let mut a = MockClassifier::with_seed(7);
        let mut b = MockClassifier::with_seed(7);
        for _ in 0..20 {
            assert_eq!(a.classify(&image), b.classify(&image));
        }
    }

    #[test]
    fn mock_classifier_covers_all_categories_and_stays_in_range() {
        let image = PathBuf::from("missing-on-disk.png");
        let mut classifier = MockClassifier::with_seed(42);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let result = classifier.classify(&image);
            assert!(result.confidence.hundredths() < Confidence::UPPER);
            assert!(looks_like_percentage(&result.confidence.to_string()));
            seen.insert(result.category);
        }
        assert_eq!(seen.len(), Category::ALL.len());
    }

    #[test]
    fn classify_selection_requires_a_file() {
        let mut classifier = MockClassifier::with_seed(1);
        let err = classify_selection(None, &mut classifier).unwrap_err();
        assert_eq!(err, ClassifyError::MissingInput);
        assert_eq!(err.to_string(), "Please select an image first!");
    }

    #[test]
    fn display_show_overwrites_previous_result() {
        let mut display = ResultDisplay::default();
        assert!(display.is_empty());

        let first = ClassificationResult {
            category: Category::Recyclable,
            confidence: Confidence::from_hundredths(1).unwrap(),
        };
        let second = ClassificationResult {
            category: Category::NonRecyclable,
            confidence: Confidence::from_hundredths(2).unwrap(),
        };
        display.show(first.render());
        display.show(second.render());
        assert_eq!(display.fragment(), Some(&second.render()));
    }
}
