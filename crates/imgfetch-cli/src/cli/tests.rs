use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(normalize_legacy_args(args.iter().map(OsString::from))).unwrap()
}

#[test]
fn cli_parse_flatfile_only() {
    let cli = parse(&["imgfetch", "urls.txt"]);
    assert_eq!(cli.flatfile.as_deref(), Some(std::path::Path::new("urls.txt")));
    assert!(!cli.prot);
    assert_eq!(cli.max, None);
    assert_eq!(cli.attempt_limit(), None);
    assert!(cli.output_dir.is_none());
}

#[test]
fn cli_parse_no_flatfile() {
    let cli = parse(&["imgfetch", "-p"]);
    assert!(cli.flatfile.is_none());
    assert!(cli.prot);
}

#[test]
fn cli_parse_max_with_limit() {
    let cli = parse(&["imgfetch", "urls.txt", "--max=5"]);
    assert_eq!(cli.max, Some(Some(5)));
    assert_eq!(cli.attempt_limit(), Some(AttemptLimit::from_count(5)));
}

#[test]
fn cli_parse_bare_max_is_unbounded() {
    let cli = parse(&["imgfetch", "--max", "urls.txt"]);
    assert_eq!(cli.flatfile.as_deref(), Some(std::path::Path::new("urls.txt")));
    assert_eq!(cli.attempt_limit(), Some(AttemptLimit::Unbounded));
}

#[test]
fn cli_parse_legacy_spellings() {
    let cli = parse(&["imgfetch", "urls.txt", "-p", "-max=12"]);
    assert!(cli.prot);
    assert_eq!(cli.attempt_limit(), Some(AttemptLimit::from_count(12)));

    let cli = parse(&["imgfetch", "urls.txt", "-max"]);
    assert_eq!(cli.attempt_limit(), Some(AttemptLimit::Unbounded));
}

#[test]
fn cli_parse_zero_limit_is_unbounded() {
    let cli = parse(&["imgfetch", "urls.txt", "--max=0"]);
    assert_eq!(cli.attempt_limit(), Some(AttemptLimit::Unbounded));

    let cli = parse(&["imgfetch", "urls.txt", "-max=0"]);
    assert_eq!(cli.attempt_limit(), Some(AttemptLimit::Unbounded));

    let cli = parse(&["imgfetch", "urls.txt", "-max=many"]);
    assert_eq!(cli.attempt_limit(), Some(AttemptLimit::Unbounded));
}

#[test]
fn cli_parse_rejects_non_numeric_long_limit() {
    let args = normalize_legacy_args(["imgfetch", "urls.txt", "--max=x"].iter().map(OsString::from));
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn cli_parse_output_dir() {
    let cli = parse(&["imgfetch", "-C", "/tmp/out", "urls.txt"]);
    assert_eq!(cli.output_dir.as_deref(), Some(std::path::Path::new("/tmp/out")));
}

#[test]
fn run_config_merges_file_and_flags() {
    let file_cfg = ImgfetchConfig {
        max_attempts: 9,
        ..ImgfetchConfig::default()
    };
    let cfg = parse(&["imgfetch", "u.txt"]).run_config(&file_cfg);
    assert_eq!(cfg.max_attempts, AttemptLimit::from_count(9));
    assert!(!cfg.log_enabled);

    let cfg = parse(&["imgfetch", "u.txt", "-p", "--max"]).run_config(&file_cfg);
    assert_eq!(cfg.max_attempts, AttemptLimit::Unbounded);
    assert!(cfg.log_enabled);
}

#[test]
fn exit_code_follows_outcome() {
    assert_eq!(exit_code(&RunOutcome::default()), 0);

    let skipped_lines = RunOutcome {
        skipped: 2,
        last_error: Some("fetching 'http://h/a.png' failed".to_string()),
        ..RunOutcome::default()
    };
    assert_eq!(exit_code(&skipped_lines), 0);

    let dir = tempfile::tempdir().unwrap();
    let runner = BatchRunner::new(
        RunConfig::default(),
        OutputDir::new(dir.path()),
        CurlFetcher::default(),
    );
    let failed = runner.run(None);
    assert_eq!(failed.last_error.as_deref(), Some("No flatfile given!"));
    assert_eq!(exit_code(&failed), 1);
}
