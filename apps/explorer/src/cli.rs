use clap::{Parser, Subcommand};

use crate::queries::menu::MENU_SIZE;

#[derive(Debug, Parser)]
#[command(about = "explores a cached list of job postings")]
pub struct Cmd {
    /// Refresh the job cache from the feed before loading
    #[arg(long)]
    pub refresh: bool,

    #[command(subcommand)]
    pub command: Option<Demo>,
}

impl Cmd {
    /// The selected demo, defaulting to date conversion.
    pub fn demo(&self) -> Demo {
        self.command.clone().unwrap_or(Demo::Dates {
            limit: 5,
            pattern: None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Demo {
    /// Jobs in Portland, OR (loop and iterator forms)
    Portland,
    /// First three junior jobs
    Junior,
    /// Captions of the first three junior jobs
    Captions,
    /// Most frequent snippet words
    Words {
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// First job whose title contains the term
    Lucky { term: String },
    /// Numbered menu of distinct companies
    Companies {
        #[arg(long, default_value_t = MENU_SIZE)]
        count: usize,
    },
    /// Feed dates converted to ISO dates, or to a strftime pattern
    Dates {
        #[arg(long, default_value_t = 5)]
        limit: usize,
        #[arg(long)]
        pattern: Option<String>,
    },
    /// Notification for the first junior job in a state
    Email {
        #[arg(long, default_value = "CA")]
        state: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_dates() {
        let cmd = Cmd::try_parse_from(["explorer"]).unwrap();
        assert!(!cmd.refresh);
        assert_eq!(
            cmd.demo(),
            Demo::Dates {
                limit: 5,
                pattern: None
            }
        );
    }

    #[test]
    fn test_parses_lucky_term_and_refresh() {
        let cmd = Cmd::try_parse_from(["explorer", "--refresh", "lucky", "Trampoline"]).unwrap();
        assert!(cmd.refresh);
        assert_eq!(
            cmd.demo(),
            Demo::Lucky {
                term: "Trampoline".to_string()
            }
        );
    }

    #[test]
    fn test_companies_default_count() {
        let cmd = Cmd::try_parse_from(["explorer", "companies"]).unwrap();
        assert_eq!(cmd.demo(), Demo::Companies { count: 20 });
    }

    #[test]
    fn test_dates_pattern_flag() {
        let cmd = Cmd::try_parse_from(["explorer", "dates", "--pattern", "%-m / %-d / %y"]).unwrap();
        assert_eq!(
            cmd.demo(),
            Demo::Dates {
                limit: 5,
                pattern: Some("%-m / %-d / %y".to_string())
            }
        );
    }

    #[test]
    fn test_words_top_flag() {
        let cmd = Cmd::try_parse_from(["explorer", "words", "--top", "3"]).unwrap();
        assert_eq!(cmd.demo(), Demo::Words { top: 3 });
    }
}
