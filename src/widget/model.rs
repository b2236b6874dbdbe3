//! DualListBox の状態とその操作
//!
//! - アイテムストア（生成後は `visible` のみ変化）
//! - 2 つのパーティション（Available / Selected）の並び順
//! - パーティションごとのフィルタ入力・適用済みパターン・遅延タイマー
//! - 選択マークと「選択分を移動」ボタンの有効状態
//!
//! すべての変更はこの型のメソッドを通り、パーティションの不変条件
//! （各アイテムがちょうど一方にだけ属する）を保つ。

use super::debounce::Debouncer;
use super::filter::Matcher;
use super::partition::Partition;
use crate::config::Options;
use crate::error::{DlbError, Result};
use crate::item::Item;
use crate::source::SelectControl;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::time::{Duration, Instant};

// ============================================================================
// 公開型
// ============================================================================

/// パーティションごとの件数とボタン状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionReport {
    /// 表示中のアイテム数
    pub visible_count: usize,
    /// 「全件移動」ボタンが有効か（表示中のアイテムが 1 件以上）
    pub move_all_enabled: bool,
    /// 「選択分を移動」ボタンが有効か
    pub move_selected_enabled: bool,
}

/// 「全件移動」要求の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAllOutcome {
    /// 移動した（件数）
    Moved(usize),
    /// 閾値超過のため確認待ち
    NeedsConfirmation,
    /// 移動対象がない
    Disabled,
}

/// フォーム送信値
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub values: Vec<String>,
}

// ============================================================================
// Lane（パーティション 1 つ分の状態）
// ============================================================================

#[derive(Debug, Clone)]
struct Lane {
    /// アイテムストアへのインデックス（表示順）
    order: Vec<usize>,
    /// 入力中のフィルタテキスト
    filter_input: String,
    /// 最後に適用したフィルタ
    applied_filter: String,
    marks: BTreeSet<usize>,
    debouncer: Debouncer,
    /// 前回の移動以降に選択変更があったか
    selection_changed: bool,
    /// 表示中アイテム内でのカーソル位置
    cursor: usize,
}

impl Lane {
    fn new(delay: Duration) -> Self {
        Self {
            order: Vec::new(),
            filter_input: String::new(),
            applied_filter: String::new(),
            marks: BTreeSet::new(),
            debouncer: Debouncer::new(delay),
            selection_changed: false,
            cursor: 0,
        }
    }

    fn reset(&mut self) {
        self.marks.clear();
        self.filter_input.clear();
        self.applied_filter.clear();
        self.debouncer.cancel();
        self.selection_changed = false;
        self.cursor = 0;
    }
}

// ============================================================================
// DualListBox
// ============================================================================

/// デュアルリストボックス 1 インスタンス分の状態
#[derive(Debug, Clone)]
pub struct DualListBox {
    name: String,
    options: Options,
    items: Vec<Item>,
    index: HashMap<String, usize>,
    lanes: [Lane; 2],
    pending_confirmation: Option<Partition>,
}

impl DualListBox {
    /// 選択コントロールを取り込んでウィジェットを構築
    ///
    /// 選択状態の項目は Selected、それ以外は Available に入る。
    /// 値が重複している場合は `DuplicateValue` を返す。
    pub fn new(control: SelectControl, options: Options) -> Result<Self> {
        let SelectControl {
            name,
            options: select_options,
        } = control;

        let delay = options.debounce();
        let mut items = Vec::with_capacity(select_options.len());
        let mut index = HashMap::with_capacity(select_options.len());
        let mut lanes = [Lane::new(delay), Lane::new(delay)];

        for option in select_options {
            if index.contains_key(&option.value) {
                return Err(DlbError::DuplicateValue(option.value));
            }
            let idx = items.len();
            let partition = if option.selected {
                Partition::Selected
            } else {
                Partition::Available
            };
            index.insert(option.value.clone(), idx);
            items.push(Item::new(
                option.value,
                option.text,
                options.max_display_text_length,
            ));
            lanes[partition.index()].order.push(idx);
        }

        let mut widget = Self {
            name,
            options,
            items,
            index,
            lanes,
            pending_confirmation: None,
        };
        for partition in Partition::all() {
            widget.sort(partition);
        }

        tracing::debug!(
            name = %widget.name,
            available = widget.lanes[0].order.len(),
            selected = widget.lanes[1].order.len(),
            "dual list box constructed"
        );
        Ok(widget)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// アイテムストア全体（生成順）
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, value: &str) -> Option<&Item> {
        self.index.get(value).map(|&idx| &self.items[idx])
    }

    /// 値の所属パーティション
    pub fn partition_of(&self, value: &str) -> Option<Partition> {
        let idx = *self.index.get(value)?;
        Partition::all()
            .into_iter()
            .find(|p| self.lanes[p.index()].order.contains(&idx))
    }

    /// パーティション内のアイテム（表示順、非表示も含む）
    pub fn items_in(&self, partition: Partition) -> impl Iterator<Item = &Item> + '_ {
        self.lanes[partition.index()]
            .order
            .iter()
            .map(move |&idx| &self.items[idx])
    }

    /// パーティション内の表示中アイテム
    pub fn visible_items(&self, partition: Partition) -> Vec<&Item> {
        self.items_in(partition).filter(|item| item.visible).collect()
    }

    pub fn values_in(&self, partition: Partition) -> Vec<&str> {
        self.items_in(partition)
            .map(|item| item.value.as_str())
            .collect()
    }

    pub fn filter_input(&self, partition: Partition) -> &str {
        &self.lanes[partition.index()].filter_input
    }

    pub fn applied_filter(&self, partition: Partition) -> &str {
        &self.lanes[partition.index()].applied_filter
    }

    pub fn is_marked(&self, partition: Partition, value: &str) -> bool {
        self.index
            .get(value)
            .is_some_and(|idx| self.lanes[partition.index()].marks.contains(idx))
    }

    /// マーク済みの値（表示順）
    pub fn marked_values(&self, partition: Partition) -> Vec<&str> {
        let lane = &self.lanes[partition.index()];
        lane.order
            .iter()
            .filter(|&&idx| lane.marks.contains(&idx))
            .map(|&idx| self.items[idx].value.as_str())
            .collect()
    }

    /// 確認待ちの「全件移動」の移動元
    pub fn pending_confirmation(&self) -> Option<Partition> {
        self.pending_confirmation
    }

    /// パーティションの不変条件を満たしているか
    ///
    /// 全アイテムがちょうど一方のパーティションにだけ含まれること。
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![0usize; self.items.len()];
        for lane in &self.lanes {
            for &idx in &lane.order {
                match seen.get_mut(idx) {
                    Some(count) => *count += 1,
                    None => return false,
                }
            }
        }
        seen.iter().all(|&count| count == 1)
    }

    // ------------------------------------------------------------------------
    // カーソルと選択マーク
    // ------------------------------------------------------------------------

    /// 表示中アイテム内のカーソル位置
    pub fn cursor(&self, partition: Partition) -> Option<usize> {
        let len = self.visible_len(partition);
        if len == 0 {
            None
        } else {
            Some(self.lanes[partition.index()].cursor.min(len - 1))
        }
    }

    pub fn cursor_item(&self, partition: Partition) -> Option<&Item> {
        let pos = self.cursor(partition)?;
        self.visible_items(partition).get(pos).copied()
    }

    pub fn move_cursor(&mut self, partition: Partition, delta: isize) {
        let len = self.visible_len(partition);
        if len == 0 {
            return;
        }
        let lane = &mut self.lanes[partition.index()];
        let current = lane.cursor.min(len - 1);
        lane.cursor = current.saturating_add_signed(delta).min(len - 1);
    }

    /// 表示中のアイテムのマークを切り替える（選択変更イベント）
    ///
    /// 戻り値はマーク後の状態。パーティション外・非表示の値は何もしない。
    pub fn toggle_mark(&mut self, partition: Partition, value: &str) -> bool {
        let Some(&idx) = self.index.get(value) else {
            return false;
        };
        let lane = &mut self.lanes[partition.index()];
        if !lane.order.contains(&idx) || !self.items[idx].visible {
            return false;
        }

        lane.selection_changed = true;
        if lane.marks.remove(&idx) {
            false
        } else {
            lane.marks.insert(idx);
            true
        }
    }

    /// カーソル位置のアイテムのマークを切り替える
    pub fn toggle_mark_at_cursor(&mut self, partition: Partition) -> bool {
        let Some(value) = self.cursor_item(partition).map(|item| item.value.clone()) else {
            return false;
        };
        self.toggle_mark(partition, &value)
    }

    // ------------------------------------------------------------------------
    // フィルタ
    // ------------------------------------------------------------------------

    /// フィルタ入力を更新し、遅延適用を予約する（保留中の予約は置き換え）
    pub fn set_filter_input(&mut self, partition: Partition, text: impl Into<String>, now: Instant) {
        let lane = &mut self.lanes[partition.index()];
        lane.filter_input = text.into();
        lane.debouncer.schedule(lane.filter_input.clone(), now);
    }

    /// 期限に達した予約を適用し、適用したパーティションを返す
    ///
    /// 確認待ちの間は表示集合を変えないよう、予約を保留したままにする。
    pub fn tick(&mut self, now: Instant) -> Vec<Partition> {
        let mut applied = Vec::new();
        if self.pending_confirmation.is_some() {
            return applied;
        }
        for partition in Partition::all() {
            if let Some(pattern) = self.lanes[partition.index()].debouncer.poll(now) {
                self.apply_filter(partition, &pattern);
                applied.push(partition);
            }
        }
        applied
    }

    /// 最も早い予約の期限（確認待ちの間は None）
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.pending_confirmation.is_some() {
            return None;
        }
        self.lanes
            .iter()
            .filter_map(|lane| lane.debouncer.deadline())
            .min()
    }

    /// フィルタを即時適用する
    ///
    /// 所属は変えず `visible` だけを更新する。非表示になったアイテムのマークは外す。
    pub fn apply_filter(&mut self, partition: Partition, pattern: &str) {
        let matcher = Matcher::compile(pattern);
        let lane = &mut self.lanes[partition.index()];

        for &idx in &lane.order {
            let item = &mut self.items[idx];
            item.visible = matcher.is_match(&item.display_text);
        }

        let items = &self.items;
        lane.marks.retain(|&idx| items[idx].visible);
        lane.debouncer.cancel();
        lane.filter_input = pattern.to_string();
        lane.applied_filter = pattern.to_string();
        lane.cursor = 0;

        tracing::debug!(
            partition = partition.label(),
            pattern,
            invalid = matcher.is_invalid(),
            "filter applied"
        );
    }

    // ------------------------------------------------------------------------
    // 件数・ボタン状態・並び替え
    // ------------------------------------------------------------------------

    /// 件数とボタン状態を算出
    pub fn recompute(&self, partition: Partition) -> PartitionReport {
        let lane = &self.lanes[partition.index()];
        let visible_count = self.visible_len(partition);
        PartitionReport {
            visible_count,
            move_all_enabled: visible_count > 0,
            move_selected_enabled: lane.selection_changed && !lane.order.is_empty(),
        }
    }

    /// 表示テキストの序数比較で昇順に並び替える
    pub fn sort(&mut self, partition: Partition) {
        let items = &self.items;
        self.lanes[partition.index()]
            .order
            .sort_by(|&a, &b| items[a].display_text.cmp(&items[b].display_text));
    }

    fn visible_len(&self, partition: Partition) -> usize {
        self.lanes[partition.index()]
            .order
            .iter()
            .filter(|&&idx| self.items[idx].visible)
            .count()
    }

    // ------------------------------------------------------------------------
    // 移動
    // ------------------------------------------------------------------------

    /// 値の集合を `target` へ移動する
    ///
    /// 既に `target` にある値と未知の値は無視する。移動後は両パーティションの
    /// マーク・フィルタ・予約を解除して全件表示に戻し、並び替える。
    pub fn move_partition<I, S>(&mut self, values: I, target: Partition) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let source = target.opposite();
        let mut wanted = HashSet::new();

        for value in values {
            let value = value.as_ref();
            match self.index.get(value) {
                Some(&idx) => {
                    wanted.insert(idx);
                }
                None => tracing::warn!(value, "ignoring unknown value"),
            }
        }

        // target 側にあるものは対象外
        let mut taken = Vec::with_capacity(wanted.len());
        self.lanes[source.index()].order.retain(|&idx| {
            if wanted.contains(&idx) {
                taken.push(idx);
                false
            } else {
                true
            }
        });
        let moved = taken.len();
        self.lanes[target.index()].order.extend(taken);

        self.finish_transfer();
        tracing::info!(moved, target = target.label(), "items transferred");
        moved
    }

    /// マーク済みのアイテムを反対側へ移動する
    ///
    /// ボタンが無効（選択変更がない）なら何もしない。
    pub fn move_selected(&mut self, source: Partition) -> usize {
        if !self.recompute(source).move_selected_enabled {
            return 0;
        }
        let values: Vec<String> = self
            .marked_values(source)
            .into_iter()
            .map(str::to_string)
            .collect();
        self.move_partition(values, source.opposite())
    }

    /// 表示中のアイテムをすべて反対側へ移動する
    ///
    /// 表示件数が閾値を超える場合は確認待ちにして何も変更しない。
    pub fn request_move_all(&mut self, source: Partition) -> MoveAllOutcome {
        let report = self.recompute(source);
        if !report.move_all_enabled {
            return MoveAllOutcome::Disabled;
        }
        if report.visible_count > self.options.move_all_confirm_threshold {
            tracing::info!(
                partition = source.label(),
                count = report.visible_count,
                threshold = self.options.move_all_confirm_threshold,
                "move all requires confirmation"
            );
            self.pending_confirmation = Some(source);
            return MoveAllOutcome::NeedsConfirmation;
        }
        MoveAllOutcome::Moved(self.move_all_visible(source))
    }

    /// 確認待ちの「全件移動」に応答する
    ///
    /// 拒否した場合は何も変更しない（エラーではない）。
    pub fn confirm_move_all(&mut self, accepted: bool) -> usize {
        let Some(source) = self.pending_confirmation.take() else {
            return 0;
        };
        if !accepted {
            tracing::info!(partition = source.label(), "move all declined");
            return 0;
        }
        self.move_all_visible(source)
    }

    fn move_all_visible(&mut self, source: Partition) -> usize {
        let values: Vec<String> = self
            .visible_items(source)
            .into_iter()
            .map(|item| item.value.clone())
            .collect();
        self.move_partition(values, source.opposite())
    }

    fn finish_transfer(&mut self) {
        for lane in &mut self.lanes {
            lane.reset();
        }
        for item in &mut self.items {
            item.visible = true;
        }
        for partition in Partition::all() {
            self.sort(partition);
        }
        self.pending_confirmation = None;
    }

    // ------------------------------------------------------------------------
    // 送信
    // ------------------------------------------------------------------------

    /// Selected の全アイテム（非表示も含む）を送信値にする
    pub fn submit(&self) -> Submission {
        Submission {
            name: self.name.clone(),
            values: self
                .values_in(Partition::Selected)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

#[cfg(test)]
#[path = "model_proptests.rs"]
mod model_proptests;
