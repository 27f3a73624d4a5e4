// src/cli.rs
use std::{env, error::Error, time::Duration};

use crate::{
    config::options::CheckOptions,
    core::Target,
    progress::{ConsoleProgress, QuietProgress},
    runner::{self, RunSummary},
};

const ARITY_ERR: &str = "you must provide exactly two arguments: class nickname and app URL";
const URL_ERR: &str = "you provided an invalid URL";

/// Parse args, grade, print. Argument errors come back before any request is sent.
pub fn run() -> Result<RunSummary, Box<dyn Error>> {
    let opts = get_args(env::args().skip(1))?;
    crate::log::init(opts.log_directive());

    let result = if opts.verbose {
        runner::run_with(&opts, &mut ConsoleProgress)
    } else {
        runner::run_with(&opts, &mut QuietProgress)
    };
    if let Err(e) = &result {
        loge!("Run aborted: {e}");
    }
    result
}

/// Absolute URL with a host, e.g. `http://localhost:3000`.
pub fn is_valid_url(raw: &str) -> bool {
    Target::parse(raw).is_ok()
}

/// `args` excludes the program name. Exactly two positionals: nickname, then URL.
pub fn get_args<I>(args: I) -> Result<CheckOptions, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = CheckOptions::default();
    let mut positional: Vec<String> = Vec::new();

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-q" | "--quiet" => opts.verbose = false,
            "--debug" => opts.debug = true,
            "--seed" => {
                let v: u64 = args.next().ok_or("Missing value for --seed")?.parse()?;
                opts.seed = Some(v); }
            "--timeout" => {
                let v: u64 = args.next().ok_or("Missing value for --timeout")?.parse()?;
                if v == 0 { return Err("Timeout must be at least 1 second".into()); }
                opts.timeout = Duration::from_secs(v); }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("Unknown arg: {}", flag).into());
            }
            _ => positional.push(a),
        }
    }

    let [nickname, url]: [String; 2] = positional.try_into().map_err(|_| ARITY_ERR)?;
    if !is_valid_url(&url) {
        return Err(URL_ERR.into());
    }

    opts.nickname = nickname;
    opts.url = url;
    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn two_positionals_required() {
        let err = get_args(args(&["kyle"])).unwrap_err();
        assert_eq!(err.to_string(), ARITY_ERR);
        assert!(get_args(args(&[])).is_err());
        assert!(get_args(args(&["kyle", "http://localhost", "extra"])).is_err());
    }

    #[test]
    fn invalid_url_rejected() {
        let err = get_args(args(&["kyle", "not a url"])).unwrap_err();
        assert_eq!(err.to_string(), URL_ERR);
        assert!(!is_valid_url("localhost:3000/"));
        assert!(!is_valid_url("/just/a/path"));
        assert!(is_valid_url("http://localhost:3000"));
    }

    #[test]
    fn flags_do_not_count_as_positionals() {
        let opts = get_args(args(&["--seed", "42", "kyle", "-q", "http://127.0.0.1:5000", "--timeout", "3"])).unwrap();
        assert_eq!(opts.nickname, "kyle");
        assert_eq!(opts.url, "http://127.0.0.1:5000");
        assert_eq!(opts.seed, Some(42));
        assert_eq!(opts.timeout, Duration::from_secs(3));
        assert!(!opts.verbose);
    }

    #[test]
    fn bad_flag_values() {
        assert!(get_args(args(&["--seed", "x", "kyle", "http://localhost"])).is_err());
        assert!(get_args(args(&["--timeout", "0", "kyle", "http://localhost"])).is_err());
        assert!(get_args(args(&["kyle", "http://localhost", "--bogus"])).is_err());
    }

    #[test]
    fn unknown_short_flag_is_named() {
        let err = get_args(args(&["-x", "kyle", "http://localhost"])).unwrap_err();
        assert_eq!(err.to_string(), "Unknown arg: -x");
        let err = get_args(args(&["kyle", "-v", "http://localhost"])).unwrap_err();
        assert_eq!(err.to_string(), "Unknown arg: -v");
    }
}
