//! Tutorial filter used by the tutorials tab view.

use crate::error::CommerceError;
use crate::learn::Tutorial;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which tutorials a tab shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TutorialFilter {
    #[default]
    All,
    Video,
    Article,
}

impl TutorialFilter {
    /// Every filter in tab order.
    pub const ALL: [TutorialFilter; 3] = [
        TutorialFilter::All,
        TutorialFilter::Video,
        TutorialFilter::Article,
    ];

    /// Machine name used in scripts and config.
    pub fn as_str(&self) -> &'static str {
        match self {
            TutorialFilter::All => "all",
            TutorialFilter::Video => "video",
            TutorialFilter::Article => "article",
        }
    }

    /// Tab caption.
    pub fn label(&self) -> &'static str {
        match self {
            TutorialFilter::All => "Всё",
            TutorialFilter::Video => "Видео",
            TutorialFilter::Article => "Статьи",
        }
    }

    /// Whether `tutorial` belongs in this tab.
    pub fn matches(&self, tutorial: &Tutorial) -> bool {
        match self {
            TutorialFilter::All => true,
            TutorialFilter::Video => tutorial.kind.is_video(),
            TutorialFilter::Article => !tutorial.kind.is_video(),
        }
    }

    /// Keep the matching tutorials, preserving source order.
    pub fn apply<'a>(&self, tutorials: &'a [Tutorial]) -> Vec<&'a Tutorial> {
        tutorials.iter().filter(|t| self.matches(t)).collect()
    }
}

impl fmt::Display for TutorialFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TutorialFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "всё" | "все" => Ok(TutorialFilter::All),
            "video" | "видео" => Ok(TutorialFilter::Video),
            "article" | "статьи" => Ok(TutorialFilter::Article),
            _ => Err(CommerceError::UnknownFilter(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learn::tutorials;

    #[test]
    fn test_video_filter() {
        let videos = TutorialFilter::Video.apply(tutorials());
        assert_eq!(videos.len(), 3);
        assert!(videos.iter().all(|t| t.kind.as_str() == "video"));
        let ids: Vec<_> = videos.iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_article_filter() {
        let ids: Vec<_> = TutorialFilter::Article
            .apply(tutorials())
            .iter()
            .map(|t| t.id.get())
            .collect();
        assert_eq!(ids, vec![2, 4, 6]);
    }

    #[test]
    fn test_all_filter_keeps_everything() {
        let all = TutorialFilter::All.apply(tutorials());
        assert_eq!(all.len(), tutorials().len());
    }

    #[test]
    fn test_filters_partition() {
        let videos = TutorialFilter::Video.apply(tutorials()).len();
        let articles = TutorialFilter::Article.apply(tutorials()).len();
        assert_eq!(videos + articles, tutorials().len());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Video".parse(), Ok(TutorialFilter::Video));
        assert_eq!("Статьи".parse(), Ok(TutorialFilter::Article));
        assert_eq!(
            "podcast".parse::<TutorialFilter>(),
            Err(CommerceError::UnknownFilter("podcast".to_string()))
        );
    }
}
