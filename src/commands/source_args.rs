//! データソースと設定の共通引数

use dlb::config::{Options, RawOptions};
use dlb::env::{EnvVar, CONFIG_ENV};
use dlb::error::Result;
use dlb::http::HttpConfig;
use dlb::source::load_control;
use dlb::widget::DualListBox;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct SourceArgs {
    /// Config file (TOML, kebab-case keys). Defaults to $DLB_CONFIG
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// URL or local path of the data source
    #[arg(long, value_name = "URI")]
    pub source_uri: Option<String>,

    /// Record field used as the item value
    #[arg(long, value_name = "FIELD")]
    pub value_field: Option<String>,

    /// Record field(s) used as the item text, e.g. `first:last`
    #[arg(long, value_name = "FIELDS")]
    pub text_field: Option<String>,

    /// Title shown after "Available" / "Selected"
    #[arg(long)]
    pub title: Option<String>,

    /// Read records from source-uri (true) or a select control file (false)
    #[arg(long, value_name = "BOOL")]
    pub use_remote_source: Option<bool>,

    /// Delay before a filter is applied
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Put the transfer buttons above each list
    #[arg(long, value_name = "BOOL")]
    pub horizontal_layout: Option<bool>,

    /// Longer item texts are truncated with "..."
    #[arg(long, value_name = "N")]
    pub max_display_text_length: Option<usize>,

    /// Show the move-all buttons
    #[arg(long, value_name = "BOOL")]
    pub show_move_all_button: Option<bool>,

    /// Ask before moving more than this many visible items at once
    #[arg(long, value_name = "N")]
    pub move_all_confirm_threshold: Option<usize>,

    /// Question asked before a large move
    #[arg(long, value_name = "TEXT")]
    pub confirm_message: Option<String>,

    /// Field name of the submitted values (records source only)
    #[arg(long, default_value = "selected")]
    pub name: String,

    /// Pre-select the item with this value (repeatable)
    #[arg(long = "selected", value_name = "VALUE")]
    pub selected: Vec<String>,
}

impl SourceArgs {
    /// コマンドラインで指定された設定レイヤー
    pub fn overrides(&self) -> RawOptions {
        RawOptions {
            source_uri: self.source_uri.clone(),
            value_field: self.value_field.clone(),
            text_field: self.text_field.clone(),
            title: self.title.clone(),
            use_remote_source: self.use_remote_source,
            debounce_ms: self.debounce_ms,
            horizontal_layout: self.horizontal_layout,
            max_display_text_length: self.max_display_text_length,
            show_move_all_button: self.show_move_all_button,
            move_all_confirm_threshold: self.move_all_confirm_threshold,
            confirm_message: self.confirm_message.clone(),
        }
    }

    /// 設定ファイルのパス（`--config` > `DLB_CONFIG`）
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config
            .clone()
            .or_else(|| EnvVar::get(CONFIG_ENV).map(PathBuf::from))
    }

    /// 設定を解決し、データを読み込んでウィジェットを構築
    pub async fn build_widget(&self) -> Result<DualListBox> {
        let options = Options::load(self.config_path().as_deref(), self.overrides())?;
        let client = HttpConfig::default().build_client();
        let preselected: HashSet<String> = self.selected.iter().cloned().collect();

        let control = load_control(&client, &options, &self.name, &preselected).await?;
        DualListBox::new(control, options)
    }
}
