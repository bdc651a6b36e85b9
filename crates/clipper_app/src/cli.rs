use std::path::PathBuf;

use clap::Parser;

/// Clip videos and web articles into Markdown notes.
#[derive(Parser, Debug)]
#[command(name = "clipper", author, version, about)]
pub struct Cli {
    /// URLs (or any text) to clip; inputs no source recognises are skipped
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// RON settings file; defaults are used when it does not exist
    #[arg(short, long, default_value = "clipper.ron")]
    pub settings: PathBuf,

    /// Directory notes are written to
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Also write the log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_inputs_are_given() {
        let cli = Cli::parse_from(["clipper", "https://vimeo.com/1", "https://example.com"]);
        assert_eq!(cli.inputs.len(), 2);
        assert_eq!(cli.settings, PathBuf::from("clipper.ron"));
        assert_eq!(cli.output, PathBuf::from("."));
        assert!(cli.log_file.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn at_least_one_input_is_required() {
        assert!(Cli::try_parse_from(["clipper"]).is_err());
    }
}
