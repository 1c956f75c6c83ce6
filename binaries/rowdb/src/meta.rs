use {
    def::row::{EMAIL_SIZE, ID_SIZE, ROW_SIZE, USERNAME_SIZE},
    storage::{PAGE_SIZE, ROWS_PER_PAGE},
};

/// Lines starting with this are directives rather than statements.
pub const META_COMMAND_PREFIX: char = '.';

const EXIT: &str = ".exit";
const CONSTANTS: &str = ".constants";

#[derive(Debug, PartialEq, Eq)]
pub enum MetaCommandOutcome {
    /// Handled, with text to show the operator (possibly empty).
    Success(String),
    Unrecognized,
    Terminate,
}

/// Matches the whole line exactly, without trimming or case folding.
pub fn do_meta_command(line: &str) -> MetaCommandOutcome {
    match line {
        EXIT => MetaCommandOutcome::Terminate,
        CONSTANTS => MetaCommandOutcome::Success(constants()),
        _ => MetaCommandOutcome::Unrecognized,
    }
}

fn constants() -> String {
    [
        ("ROW_SIZE", ROW_SIZE),
        ("ID_SIZE", ID_SIZE),
        ("USERNAME_SIZE", USERNAME_SIZE),
        ("EMAIL_SIZE", EMAIL_SIZE),
        ("PAGE_SIZE", PAGE_SIZE),
        ("ROWS_PER_PAGE", ROWS_PER_PAGE),
    ]
    .iter()
    .map(|(name, value)| format!("{}: {}", name, value))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit() {
        assert_eq!(do_meta_command(".exit"), MetaCommandOutcome::Terminate);
    }

    #[test]
    fn exact_match_only() {
        for line in [".exit ", " .exit", ".EXIT", ".exi", ".exitt", ".", ".quit"] {
            assert_eq!(do_meta_command(line), MetaCommandOutcome::Unrecognized, "{line:?}");
        }
    }

    #[test]
    fn constants_layout() {
        let MetaCommandOutcome::Success(text) = do_meta_command(".constants") else {
            panic!("`.constants` should be recognized");
        };

        assert_eq!(
            text,
            "ROW_SIZE: 291\nID_SIZE: 4\nUSERNAME_SIZE: 32\nEMAIL_SIZE: 255\nPAGE_SIZE: 4096\nROWS_PER_PAGE: 14"
        );
    }
}
