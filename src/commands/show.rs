//! dlb show コマンド
//!
//! ウィジェットを構築してフィルタを即時適用し、両リストを表示する。

use super::source_args::SourceArgs;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use dlb::widget::{DualListBox, Partition, Submission};
use serde::Serialize;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Filter pattern (case-insensitive regex) for the available list
    #[arg(long, value_name = "PATTERN")]
    pub filter_available: Option<String>,

    /// Filter pattern (case-insensitive regex) for the selected list
    #[arg(long, value_name = "PATTERN")]
    pub filter_selected: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// JSON 出力用のアイテム
#[derive(Debug, Serialize)]
struct ItemView<'a> {
    value: &'a str,
    text: &'a str,
}

/// JSON 出力用のパーティション
#[derive(Debug, Serialize)]
struct PartitionView<'a> {
    title: String,
    filter: &'a str,
    showing: usize,
    items: Vec<ItemView<'a>>,
}

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    available: PartitionView<'a>,
    selected: PartitionView<'a>,
    submission: Submission,
}

pub async fn run(args: Args) -> Result<(), String> {
    let mut widget = args.source.build_widget().await.map_err(|e| super::describe(&e))?;

    if let Some(pattern) = &args.filter_available {
        widget.apply_filter(Partition::Available, pattern);
    }
    if let Some(pattern) = &args.filter_selected {
        widget.apply_filter(Partition::Selected, pattern);
    }

    if args.json {
        println!("{}", to_json(&widget)?);
    } else {
        print!("{}", render_table(&widget));
    }
    Ok(())
}

fn partition_title(widget: &DualListBox, partition: Partition) -> String {
    format!("{} {}", partition.label(), widget.options().title)
}

fn partition_view(widget: &DualListBox, partition: Partition) -> PartitionView<'_> {
    let items: Vec<ItemView> = widget
        .visible_items(partition)
        .into_iter()
        .map(|item| ItemView {
            value: &item.value,
            text: &item.display_text,
        })
        .collect();

    PartitionView {
        title: partition_title(widget, partition),
        filter: widget.applied_filter(partition),
        showing: widget.recompute(partition).visible_count,
        items,
    }
}

fn to_json(widget: &DualListBox) -> Result<String, String> {
    let output = ShowOutput {
        available: partition_view(widget, Partition::Available),
        selected: partition_view(widget, Partition::Selected),
        submission: widget.submit(),
    };
    serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
}

fn render_table(widget: &DualListBox) -> String {
    let mut out = String::new();

    for partition in Partition::all() {
        let report = widget.recompute(partition);
        out.push_str(&format!(
            "{} - showing {}\n",
            partition_title(widget, partition),
            report.visible_count
        ));

        if report.visible_count == 0 {
            out.push_str("  (empty)\n\n");
            continue;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Value", "Text"]);
        for item in widget.visible_items(partition) {
            table.add_row(vec![item.value.as_str(), item.display_text.as_str()]);
        }
        out.push_str(&format!("{table}\n\n"));
    }

    out
}

#[cfg(test)]
#[path = "show_test.rs"]
mod show_test;
