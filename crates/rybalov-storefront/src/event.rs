//! UI events and their one-line text form.
//!
//! ```text
//! nav <section>      tab <all|video|article>
//! add <id>           remove <id>
//! inc <id>           dec <id>
//! qty <id> <delta>   open | close | checkout
//! ```

use std::fmt;
use std::str::FromStr;

use rybalov_commerce::learn::TutorialFilter;
use rybalov_commerce::ProductId;

use crate::error::StorefrontError;
use crate::section::Section;

/// A user interaction dispatched to [`crate::Storefront::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Navigate(Section),
    SelectTutorialTab(TutorialFilter),
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    ChangeQuantity { id: ProductId, delta: i64 },
    OpenCart,
    CloseCart,
    Checkout,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Navigate(section) => write!(f, "nav {}", section.slug()),
            Event::SelectTutorialTab(tab) => write!(f, "tab {}", tab),
            Event::AddToCart(id) => write!(f, "add {}", id),
            Event::RemoveFromCart(id) => write!(f, "remove {}", id),
            Event::ChangeQuantity { id, delta: 1 } => write!(f, "inc {}", id),
            Event::ChangeQuantity { id, delta: -1 } => write!(f, "dec {}", id),
            Event::ChangeQuantity { id, delta } => write!(f, "qty {} {}", id, delta),
            Event::OpenCart => f.write_str("open"),
            Event::CloseCart => f.write_str("close"),
            Event::Checkout => f.write_str("checkout"),
        }
    }
}

impl FromStr for Event {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let mut parts = input.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err(StorefrontError::invalid_event(input, "empty event"));
        };
        let args: Vec<&str> = parts.collect();

        let expect_args = |n: usize| {
            if args.len() == n {
                Ok(())
            } else {
                Err(StorefrontError::invalid_event(
                    input,
                    format!("`{}` takes {} argument(s), got {}", verb, n, args.len()),
                ))
            }
        };
        let product_id = |raw: &str| {
            raw.parse::<ProductId>()
                .map_err(|_| StorefrontError::invalid_event(input, format!("bad product id `{}`", raw)))
        };

        match verb.to_lowercase().as_str() {
            "nav" => {
                expect_args(1)?;
                Ok(Event::Navigate(args[0].parse()?))
            }
            "tab" => {
                expect_args(1)?;
                Ok(Event::SelectTutorialTab(args[0].parse()?))
            }
            "add" => {
                expect_args(1)?;
                Ok(Event::AddToCart(product_id(args[0])?))
            }
            "remove" => {
                expect_args(1)?;
                Ok(Event::RemoveFromCart(product_id(args[0])?))
            }
            "inc" | "dec" => {
                expect_args(1)?;
                let delta = if verb.eq_ignore_ascii_case("inc") { 1 } else { -1 };
                Ok(Event::ChangeQuantity {
                    id: product_id(args[0])?,
                    delta,
                })
            }
            "qty" => {
                expect_args(2)?;
                let delta = args[1].parse::<i64>().map_err(|_| {
                    StorefrontError::invalid_event(input, format!("bad delta `{}`", args[1]))
                })?;
                Ok(Event::ChangeQuantity {
                    id: product_id(args[0])?,
                    delta,
                })
            }
            "open" => expect_args(0).map(|_| Event::OpenCart),
            "close" => expect_args(0).map(|_| Event::CloseCart),
            "checkout" => expect_args(0).map(|_| Event::Checkout),
            _ => Err(StorefrontError::invalid_event(
                input,
                format!("unknown verb `{}`", verb),
            )),
        }
    }
}

/// Parse an event script: one event per line, blank lines and `#` comments
/// skipped. Errors carry the 1-based line number.
pub fn parse_script(script: &str) -> Result<Vec<Event>, StorefrontError> {
    script
        .lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let line = raw.split('#').next().unwrap_or("").trim();
            (!line.is_empty()).then_some((index + 1, line))
        })
        .map(|(line, text)| {
            text.parse::<Event>()
                .map_err(|source| StorefrontError::Script {
                    line,
                    source: Box::new(source),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_verb() {
        let id = ProductId::new(3);
        assert_eq!("nav Техники".parse(), Ok(Event::Navigate(Section::Techniques)));
        assert_eq!(
            "tab video".parse(),
            Ok(Event::SelectTutorialTab(TutorialFilter::Video))
        );
        assert_eq!("add 3".parse(), Ok(Event::AddToCart(id)));
        assert_eq!("remove 3".parse(), Ok(Event::RemoveFromCart(id)));
        assert_eq!("inc 3".parse(), Ok(Event::ChangeQuantity { id, delta: 1 }));
        assert_eq!("DEC 3".parse(), Ok(Event::ChangeQuantity { id, delta: -1 }));
        assert_eq!("qty 3 -5".parse(), Ok(Event::ChangeQuantity { id, delta: -5 }));
        assert_eq!("open".parse(), Ok(Event::OpenCart));
        assert_eq!("close".parse(), Ok(Event::CloseCart));
        assert_eq!("checkout".parse(), Ok(Event::Checkout));
    }

    #[test]
    fn test_display_parses_back() {
        let events = [
            Event::Navigate(Section::Waters),
            Event::SelectTutorialTab(TutorialFilter::Article),
            Event::ChangeQuantity {
                id: ProductId::new(1),
                delta: -1,
            },
            Event::ChangeQuantity {
                id: ProductId::new(1),
                delta: 7,
            },
            Event::Checkout,
        ];
        for event in events {
            assert_eq!(event.to_string().parse::<Event>(), Ok(event));
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "add".parse::<Event>(),
            Err(StorefrontError::InvalidEvent { .. })
        ));
        assert!(matches!(
            "add fish".parse::<Event>(),
            Err(StorefrontError::InvalidEvent { .. })
        ));
        assert!(matches!(
            "fly 1".parse::<Event>(),
            Err(StorefrontError::InvalidEvent { .. })
        ));
        assert!(matches!(
            "nav river".parse::<Event>(),
            Err(StorefrontError::UnknownSection(_))
        ));
        assert!(matches!(
            "tab podcast".parse::<Event>(),
            Err(StorefrontError::Commerce(_))
        ));
    }

    #[test]
    fn test_parse_script_skips_comments() {
        let script = "# warm-up\nadd 1\n\nadd 1   # twice\nnav techniques\n";
        let events = parse_script(script).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[2], Event::Navigate(Section::Techniques));
    }

    #[test]
    fn test_parse_script_reports_line() {
        let err = parse_script("add 1\n\nqty 1 many\n").unwrap_err();
        match err {
            StorefrontError::Script { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
