use super::*;
use clap::CommandFactory;
use std::io::Cursor;
use sysfont_core::Registry;

fn font(family: &str, name: &str, path: &str) -> Font {
    Font::new(family, name, path)
}

fn no_output_flags() -> OutputArgs {
    OutputArgs {
        json: false,
        ndjson: false,
        columns: false,
        color: ColorChoice::Never,
    }
}

#[test]
fn parses_match_args() {
    let cli = Cli::try_parse_from([
        "sysfont", "match", "Arial Bold", "Helvetica", "-j", "2", "-d", "/fonts", "--json",
    ])
    .expect("parse cli");

    let Command::Match(args) = cli.command else {
        panic!("expected match command");
    };
    assert_eq!(args.queries, vec!["Arial Bold", "Helvetica"]);
    assert_eq!(args.jobs, Some(2));
    assert_eq!(args.source.dirs, vec![PathBuf::from("/fonts")]);
    assert!(args.output.json);
}

#[test]
fn match_requires_a_query() {
    assert!(Cli::try_parse_from(["sysfont", "match"]).is_err());
}

#[test]
fn json_and_ndjson_conflict() {
    let parse = Cli::try_parse_from(["sysfont", "list", "--json", "--ndjson"]);
    assert!(parse.is_err());
}

#[test]
fn extensions_split_on_commas() {
    let cli = Cli::try_parse_from(["sysfont", "list", "-e", "ttf,otf", "--ext", "woff"])
        .expect("parse cli");

    let Command::List(args) = cli.command else {
        panic!("expected list command");
    };
    assert_eq!(args.source.extensions, vec!["ttf", "otf", "woff"]);
}

#[test]
fn verbose_is_global() {
    let cli = Cli::try_parse_from(["sysfont", "alternatives", "Arial", "--verbose"])
        .expect("parse cli");
    assert!(cli.verbose);
}

#[test]
fn invalid_regex_returns_error() {
    assert!(compile_patterns(&["(".to_string()]).is_err());
}

#[test]
fn name_patterns_match_family_or_name() {
    let fonts = vec![
        font("Arial", "Arial Bold", "/f/arialbd.ttf"),
        font("Verdana", "Verdana", "/f/verdana.ttf"),
        font("Menlo", "Menlo Bold", "/f/Menlo.ttc"),
    ];
    let patterns = compile_patterns(&["(?i)bold$".to_string()]).expect("regex");

    let kept = filter_by_name(fonts, &patterns);
    let names: Vec<&str> = kept.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Arial Bold", "Menlo Bold"]);
}

#[test]
fn gathers_paths_from_stdin_when_flagged() {
    let mut stdin = Cursor::new(b"/fonts/A\n\n/fonts/B\n".to_vec());
    let paths = gather_paths(&[], true, false, &mut stdin).expect("paths");

    assert_eq!(
        paths,
        vec![PathBuf::from("/fonts/A"), PathBuf::from("/fonts/B")]
    );
}

#[test]
fn dash_placeholder_reads_stdin_and_merges_other_paths() {
    let mut stdin = Cursor::new(b"/fonts/A\n".to_vec());
    let paths = gather_paths(
        &[PathBuf::from("-"), PathBuf::from("/fonts/B")],
        false,
        false,
        &mut stdin,
    )
    .expect("paths");

    assert_eq!(
        paths,
        vec![PathBuf::from("/fonts/A"), PathBuf::from("/fonts/B")]
    );
}

#[test]
fn resolves_queries_in_input_order() {
    let finder = Finder::from_fonts(
        Registry::builtin(),
        vec![
            font("Arial", "Arial", "/f/arial.ttf"),
            font("Arial", "Arial Bold", "/f/arialbd.ttf"),
            font("Verdana", "Verdana", "/f/verdana.ttf"),
        ],
    );
    let queries: Vec<String> = ["Verdana", "Arial Bold", "Arial", "Verdana"]
        .iter()
        .map(|q| q.to_string())
        .collect();

    let outcomes = resolve_queries(&finder, &queries, Some(2)).expect("resolve");

    let resolved: Vec<(&str, &str)> = outcomes
        .iter()
        .map(|o| (o.query.as_str(), o.font.as_ref().map_or("", |f| f.name.as_str())))
        .collect();
    assert_eq!(
        resolved,
        vec![
            ("Verdana", "Verdana"),
            ("Arial Bold", "Arial Bold"),
            ("Arial", "Arial"),
            ("Verdana", "Verdana"),
        ]
    );
}

#[test]
fn writes_plain_with_unidentified_placeholder() {
    let fonts = vec![
        font("Arial", "Arial", "/f/arial.ttf"),
        font("my script", "", "/f/my-script.ttf"),
    ];

    let mut buf = Cursor::new(Vec::new());
    write_plain(&fonts, &mut buf, false).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Arial\tArial\t/f/arial.ttf");
    assert_eq!(lines[1], "my script\t(unidentified)\t/f/my-script.ttf");
}

#[test]
fn columns_align_names() {
    let fonts = vec![
        font("Arial", "Arial Bold", "/f/arialbd.ttf"),
        font("Times New Roman", "Times New Roman", "/f/times.ttf"),
    ];

    let mut buf = Cursor::new(Vec::new());
    write_columns(&fonts, &mut buf, false).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    let bold_pos = lines[0].find("Arial Bold").expect("arial bold");
    let times_pos = lines[1].rfind("Times New Roman  ").expect("times name");
    assert_eq!(bold_pos, times_pos);
}

#[test]
fn outcomes_report_missing_matches() {
    let outcomes = vec![
        MatchOutcome {
            query: "Arial".to_string(),
            font: Some(font("Arial", "Arial", "/f/arial.ttf")),
        },
        MatchOutcome {
            query: "Nothing".to_string(),
            font: None,
        },
    ];

    let mut buf = Cursor::new(Vec::new());
    write_outcomes(&outcomes, &mut buf, false).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Arial   -> Arial (/f/arial.ttf)");
    assert_eq!(lines[1], "Nothing -> (no match)");
}

#[test]
fn json_outcomes_serialize_null_font() {
    let outcomes = vec![MatchOutcome {
        query: "Nothing".to_string(),
        font: None,
    }];

    let mut buf = Vec::new();
    write_json_pretty(&outcomes, &mut buf).expect("write");

    let parsed: serde_json::Value = serde_json::from_slice(&buf).expect("json");
    assert_eq!(parsed[0]["query"], "Nothing");
    assert!(parsed[0]["font"].is_null());
}

#[test]
fn write_fonts_honours_ndjson() {
    let fonts = vec![font("Arial", "Arial", "/f/arial.ttf")];
    let output = OutputArgs {
        ndjson: true,
        ..no_output_flags()
    };

    let mut buf = Vec::new();
    write_fonts(&fonts, &output, &mut buf, false).expect("write");

    let text = String::from_utf8(buf).expect("utf8");
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with('{'));
}

#[test]
fn color_choice_is_applied() {
    let fonts = vec![font("Arial", "Arial", "/f/arial.ttf")];

    let mut buf = Cursor::new(Vec::new());
    write_plain(&fonts, &mut buf, true).expect("write");

    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    assert!(output.contains("\u{1b}["));
}

#[test]
fn help_output_lists_subcommands() {
    let help = Cli::command().render_long_help().to_string();
    assert!(help.contains("list"));
    assert!(help.contains("match"));
    assert!(help.contains("alternatives"));
}
