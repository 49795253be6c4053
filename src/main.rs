use clap::Parser;
use itertools::Itertools;
use serde_json::{Map, Value};
use tracing::debug;

use json_value_compare::{self as jvc, CompareError, DecimalText, Operand, Operator, Side};

/// Compare two JSON values: `jvc 22 '<' 30`, `jvc '"cooking"' in '["fishing","cooking"]'`.
#[derive(Parser, Debug)]
#[command(author, version, about, allow_negative_numbers = true)]
struct Args {
    /// Left operand (JSON document)
    left: String,
    /// Operator: == != < > <= >= in not_in (or eq, ne, lt, gt, le, ge)
    #[arg(required_unless_present = "all")]
    op: Option<String>,
    /// Right operand (JSON document)
    #[arg(required_unless_present = "all")]
    right: Option<String>,
    /// Evaluate every operator; the operator argument may then be omitted
    #[arg(long)]
    all: bool,
    /// Print results as a JSON object
    #[arg(long)]
    json: bool,
    /// Pass top-level JSON numbers as decimal text
    #[arg(long)]
    decimal: bool,
    /// Exit with status 1 when the single result is false
    #[arg(long)]
    exit_code: bool,
    /// Emit trace output on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_operand(text: &str, side: Side, decimal: bool) -> jvc::Result<Operand> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| CompareError::InvalidJson { side, source })?;
    Ok(match value {
        Value::Number(n) if decimal => Operand::from(DecimalText::from(&n)),
        other => Operand::from(other),
    })
}

/// The (left, right) JSON texts and operators to evaluate.
fn plan(args: &Args) -> jvc::Result<(&str, Vec<Operator>)> {
    if args.all {
        // With --all a lone second positional is the right operand.
        let right = match (&args.op, &args.right) {
            (_, Some(r)) => r.as_str(),
            (Some(r), None) => r.as_str(),
            (None, None) => "null",
        };
        return Ok((right, Operator::ALL.to_vec()));
    }
    let op = args.op.as_deref().unwrap_or_default().parse::<Operator>()?;
    Ok((args.right.as_deref().unwrap_or("null"), vec![op]))
}

fn render(results: &[(Operator, bool)], json: bool) -> String {
    if json {
        let obj: Map<String, Value> = results
            .iter()
            .map(|(op, r)| (op.name().to_string(), Value::Bool(*r)))
            .collect();
        return Value::Object(obj).to_string();
    }
    match results {
        [(_, r)] => r.to_string(),
        _ => results
            .iter()
            .map(|(op, r)| format!("{}: {r}", op.name()))
            .join("\n"),
    }
}

/// Process status for a successful run: 1 only when `--exit-code` is set and
/// the single result is false.
fn exit_status(exit_code: bool, results: &[(Operator, bool)]) -> i32 {
    match results {
        [(_, false)] if exit_code => 1,
        _ => 0,
    }
}

fn run(args: &Args) -> jvc::Result<Vec<(Operator, bool)>> {
    let (right_text, ops) = plan(args)?;
    let left = parse_operand(&args.left, Side::Left, args.decimal)?;
    let right = parse_operand(right_text, Side::Right, args.decimal)?;
    debug!(left = left.category(), right = right.category(), "parsed operands");
    Ok(ops
        .into_iter()
        .map(|op| (op, jvc::compare(op, &left, &right)))
        .collect())
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::stderr)
            .init();
    }

    let results = match run(&args) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    println!("{}", render(&results, args.json));

    let status = exit_status(args.exit_code, &results);
    if status != 0 {
        std::process::exit(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("jvc").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn single_operator() {
        let out = run(&args(&["22", "<", "30"])).unwrap();
        assert_eq!(render(&out, false), "true");
    }

    #[test]
    fn membership_on_json_array() {
        let out = run(&args(&["\"cooking\"", "in", r#"["fishing","cooking"]"#])).unwrap();
        assert_eq!(out, vec![(Operator::In, true)]);
    }

    #[test]
    fn all_operators_with_right_only() {
        let out = run(&args(&["--all", "3", "4"])).unwrap();
        assert_eq!(out.len(), 8);
        assert_eq!(
            render(&out[..2], false),
            "equal: false\nnot_equal: true"
        );
    }

    #[test]
    fn json_output() {
        let out = run(&args(&["true", "==", "true"])).unwrap();
        assert_eq!(render(&out, true), r#"{"equal":true}"#);
    }

    #[test]
    fn exit_code_follows_single_result() {
        let a = args(&["--exit-code", "1", ">", "2"]);
        let out = run(&a).unwrap();
        assert_eq!(exit_status(a.exit_code, &out), 1);
        assert_eq!(exit_status(false, &out), 0);
        assert_eq!(exit_status(true, &[(Operator::Equal, true)]), 0);
        let all = run(&args(&["--all", "1", "2"])).unwrap();
        assert_eq!(exit_status(true, &all), 0);
    }

    #[test]
    fn decimal_flag_parses_numbers_as_text() {
        let out = run(&args(&["--decimal", "3.50", ">=", "3.5"])).unwrap();
        assert_eq!(out, vec![(Operator::GreaterEqual, true)]);
    }

    #[test]
    fn bad_input_reports_side() {
        let err = run(&args(&["1", "==", "{oops"])).unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON for right operand"));
        let err = run(&args(&["1", "~", "2"])).unwrap_err();
        assert!(matches!(err, CompareError::UnknownOperator(ref s) if s == "~"));
    }

    #[test]
    fn operator_required_without_all() {
        assert!(Args::try_parse_from(["jvc", "1"]).is_err());
    }
}
