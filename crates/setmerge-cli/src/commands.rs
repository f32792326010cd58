use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use setmerge_core::{merge_all, merge_with_report, MergeReport, UniqueContainer};
use setmerge_input::{
    load_set, sorted, Element, ElementSet, MergeConfig, OrderedElementSet, OutputFormat, SetFormat,
};
use tracing::debug;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let format: Option<OutputFormat> = cli.format.map(Into::into);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Merge(args) => cmd_merge(args, format, &mut out),
        Command::Union(args) => cmd_union(args, format, &mut out),
        Command::Check(args) => cmd_check(args, format, &mut out),
    }
}

/// Layer CLI flags over the config file. Flags can only switch options on.
fn resolve_config(
    path: Option<&Path>,
    ordered: bool,
    report: bool,
    format: Option<OutputFormat>,
) -> anyhow::Result<MergeConfig> {
    let mut config = match path {
        Some(p) => MergeConfig::load(p)
            .with_context(|| format!("failed to read config {}", p.display()))?,
        None => MergeConfig::default(),
    };
    config.ordered |= ordered;
    config.report |= report;
    if let Some(f) = format {
        config.output = f;
    }
    debug!(?config, "resolved merge config");
    Ok(config)
}

fn load<C>(path: &Path, format: Option<SetFormat>) -> anyhow::Result<C>
where
    C: UniqueContainer<Item = Element>,
{
    load_set(path, format).with_context(|| format!("failed to load set {}", path.display()))
}

fn merge_two<C>(
    left: &Path,
    right: &Path,
    format: Option<SetFormat>,
) -> anyhow::Result<(Vec<Element>, MergeReport)>
where
    C: UniqueContainer<Item = Element>,
{
    let left: C = load(left, format)?;
    let right: C = load(right, format)?;
    let (merged, report) = merge_with_report(&left, &right);
    Ok((sorted(&merged), report))
}

fn merge_many<C>(paths: &[PathBuf], format: Option<SetFormat>) -> anyhow::Result<Vec<Element>>
where
    C: UniqueContainer<Item = Element>,
{
    let sets = paths
        .iter()
        .map(|p| load::<C>(p, format))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let merged: C = merge_all(&sets);
    Ok(sorted(&merged))
}

fn cmd_merge(args: MergeArgs, format: Option<OutputFormat>, out: &mut impl Write) -> anyhow::Result<()> {
    let config = resolve_config(args.config.as_deref(), args.ordered, args.report, format)?;
    let input: Option<SetFormat> = args.input_format.map(Into::into);
    let (elements, report) = if config.ordered {
        merge_two::<OrderedElementSet>(&args.left, &args.right, input)?
    } else {
        merge_two::<ElementSet>(&args.left, &args.right, input)?
    };
    let report = config.report.then_some(report);
    render(out, &elements, report.as_ref(), config.output)
}

fn cmd_union(args: UnionArgs, format: Option<OutputFormat>, out: &mut impl Write) -> anyhow::Result<()> {
    let config = resolve_config(args.config.as_deref(), args.ordered, false, format)?;
    let input: Option<SetFormat> = args.input_format.map(Into::into);
    let elements = if config.ordered {
        merge_many::<OrderedElementSet>(&args.files, input)?
    } else {
        merge_many::<ElementSet>(&args.files, input)?
    };
    render(out, &elements, None, config.output)
}

fn cmd_check(args: CheckArgs, format: Option<OutputFormat>, out: &mut impl Write) -> anyhow::Result<()> {
    let set: ElementSet = load(&args.file, args.input_format.map(Into::into))?;
    match format.unwrap_or_default() {
        OutputFormat::Text => writeln!(
            out,
            "{} {}: {} elements",
            "✓".green().bold(),
            args.file.display(),
            set.len().to_string().bold()
        )?,
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "path": args.file.display().to_string(),
                "len": set.len(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
    }
    Ok(())
}

fn render(
    out: &mut impl Write,
    elements: &[Element],
    report: Option<&MergeReport>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for element in elements {
                writeln!(out, "{element}")?;
            }
            if let Some(r) = report {
                writeln!(
                    out,
                    "{} merged {} elements (left {}, right {}, shared {})",
                    "✓".green().bold(),
                    r.merged_len.to_string().bold(),
                    r.left_len,
                    r.right_len,
                    r.shared.to_string().yellow()
                )?;
            }
        }
        OutputFormat::Json => {
            let doc = match report {
                Some(r) => serde_json::json!({ "elements": elements, "report": r }),
                None => serde_json::to_value(elements)?,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
    }
    Ok(())
}
