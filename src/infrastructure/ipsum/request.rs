//! Bacon Ipsum request parameters

/// Kind of filler text to request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillerType {
    #[default]
    AllMeat,
    MeatAndFiller,
}

impl FillerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllMeat => "all-meat",
            Self::MeatAndFiller => "meat-and-filler",
        }
    }
}

impl std::str::FromStr for FillerType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all-meat" => Ok(Self::AllMeat),
            "meat-and-filler" => Ok(Self::MeatAndFiller),
            other => Err(format!("Unknown filler type: {}", other)),
        }
    }
}

/// Parameters for one ipsum-text request.
///
/// The API returns five paragraphs by default; a sentence count overrides
/// the paragraph count upstream.
#[derive(Debug, Clone, Default)]
pub struct IpsumRequest {
    filler: FillerType,
    paragraphs: Option<u32>,
    sentences: Option<u32>,
    start_with_lorem: bool,
}

impl IpsumRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filler(mut self, filler: FillerType) -> Self {
        self.filler = filler;
        self
    }

    pub fn with_paragraphs(mut self, count: u32) -> Self {
        self.paragraphs = Some(count);
        self
    }

    pub fn with_sentences(mut self, count: u32) -> Self {
        self.sentences = Some(count);
        self
    }

    pub fn with_start_with_lorem(mut self) -> Self {
        self.start_with_lorem = true;
        self
    }

    /// Renders the query string, starting with the filler type
    pub fn query_string(&self) -> String {
        let mut query = format!("?type={}", self.filler.as_str());

        if let Some(paragraphs) = self.paragraphs {
            query.push_str(&format!("&paras={}", paragraphs));
        }
        if let Some(sentences) = self.sentences {
            query.push_str(&format!("&sentences={}", sentences));
        }
        if self.start_with_lorem {
            query.push_str("&start-with-lorem=1");
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_all_meat() {
        assert_eq!(IpsumRequest::new().query_string(), "?type=all-meat");
    }

    #[test]
    fn test_meat_and_filler() {
        let request = IpsumRequest::new().with_filler(FillerType::MeatAndFiller);
        assert_eq!(request.query_string(), "?type=meat-and-filler");
    }

    #[test]
    fn test_paragraph_count() {
        let request = IpsumRequest::new().with_paragraphs(12);
        assert_eq!(request.query_string(), "?type=all-meat&paras=12");
    }

    #[test]
    fn test_sentence_count() {
        let request = IpsumRequest::new().with_sentences(6);
        assert_eq!(request.query_string(), "?type=all-meat&sentences=6");
    }

    #[test]
    fn test_start_with_lorem() {
        let request = IpsumRequest::new().with_start_with_lorem();
        assert_eq!(request.query_string(), "?type=all-meat&start-with-lorem=1");
    }

    #[test]
    fn test_all_parameters_in_order() {
        let request = IpsumRequest::new()
            .with_filler(FillerType::MeatAndFiller)
            .with_paragraphs(12)
            .with_sentences(6)
            .with_start_with_lorem();

        assert_eq!(
            request.query_string(),
            "?type=meat-and-filler&paras=12&sentences=6&start-with-lorem=1"
        );
    }

    #[test]
    fn test_filler_type_from_str() {
        assert_eq!("all-meat".parse::<FillerType>(), Ok(FillerType::AllMeat));
        assert_eq!(
            "meat-and-filler".parse::<FillerType>(),
            Ok(FillerType::MeatAndFiller)
        );
        assert!("bacon".parse::<FillerType>().is_err());
    }
}
