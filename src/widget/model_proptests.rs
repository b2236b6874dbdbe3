use super::*;
use crate::source::SelectOption;
use proptest::prelude::*;

/// ウィジェットへの操作
#[derive(Debug, Clone)]
enum Op {
    Filter(Partition, String),
    Mark(Partition, usize),
    MoveSelected(Partition),
    MoveAll(Partition, bool),
    MoveValues(Vec<usize>, Partition),
}

fn partition_strategy() -> impl Strategy<Value = Partition> {
    prop_oneof![Just(Partition::Available), Just(Partition::Selected)]
}

/// 不正な正規表現も含むフィルタ文字列
fn pattern_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{0,3}".prop_map(|s| s),
        Just("(".to_string()),
        Just("^b".to_string()),
    ]
}

fn op_strategy(len: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        (partition_strategy(), pattern_strategy()).prop_map(|(p, s)| Op::Filter(p, s)),
        (partition_strategy(), 0..len).prop_map(|(p, i)| Op::Mark(p, i)),
        partition_strategy().prop_map(Op::MoveSelected),
        (partition_strategy(), any::<bool>()).prop_map(|(p, yes)| Op::MoveAll(p, yes)),
        (prop::collection::vec(0..len, 0..4), partition_strategy())
            .prop_map(|(v, p)| Op::MoveValues(v, p)),
    ]
}

fn build(texts: &[String], selected: &[bool], threshold: usize) -> DualListBox {
    let options = texts
        .iter()
        .zip(selected)
        .enumerate()
        .map(|(i, (text, &sel))| SelectOption::new(i.to_string(), text.clone()).with_selected(sel))
        .collect();
    let raw = crate::config::RawOptions {
        move_all_confirm_threshold: Some(threshold),
        ..crate::config::RawOptions::default()
    };
    let options_cfg = Options::load(None, raw).unwrap();
    DualListBox::new(SelectControl::new("prop", options), options_cfg).unwrap()
}

fn apply(widget: &mut DualListBox, op: &Op) {
    match op {
        Op::Filter(p, s) => widget.apply_filter(*p, s),
        Op::Mark(p, i) => {
            widget.toggle_mark(*p, &i.to_string());
        }
        Op::MoveSelected(p) => {
            widget.move_selected(*p);
        }
        Op::MoveAll(p, yes) => {
            if widget.request_move_all(*p) == MoveAllOutcome::NeedsConfirmation {
                widget.confirm_move_all(*yes);
            }
        }
        Op::MoveValues(values, p) => {
            let values: Vec<String> = values.iter().map(|i| i.to_string()).collect();
            widget.move_partition(values, *p);
        }
    }
}

proptest! {
    /// どの操作列の後でも、各アイテムはちょうど一方のパーティションに属する
    #[test]
    fn prop_partition_invariant_holds(
        texts in prop::collection::vec("[a-zA-Z]{1,6}", 1..8),
        seed in any::<u64>(),
        threshold in 0usize..4,
        ops in prop::collection::vec(op_strategy(8), 0..20)
    ) {
        let selected: Vec<bool> = (0..texts.len()).map(|i| (seed >> i) & 1 == 1).collect();
        let mut widget = build(&texts, &selected, threshold);
        prop_assert!(widget.is_consistent());

        for op in &ops {
            apply(&mut widget, op);
            prop_assert!(widget.is_consistent());
            let total = widget.values_in(Partition::Available).len()
                + widget.values_in(Partition::Selected).len();
            prop_assert_eq!(total, texts.len());
        }
    }

    /// フィルタは所属を変えない
    #[test]
    fn prop_filter_preserves_membership(
        texts in prop::collection::vec("[a-zA-Z]{1,6}", 1..8),
        pattern in pattern_strategy(),
        partition in partition_strategy()
    ) {
        let selected: Vec<bool> = texts.iter().enumerate().map(|(i, _)| i % 2 == 0).collect();
        let mut widget = build(&texts, &selected, 100);
        let before: Vec<Vec<String>> = Partition::all()
            .iter()
            .map(|p| widget.values_in(*p).into_iter().map(str::to_string).collect())
            .collect();

        widget.apply_filter(partition, &pattern);

        let after: Vec<Vec<String>> = Partition::all()
            .iter()
            .map(|p| widget.values_in(*p).into_iter().map(str::to_string).collect())
            .collect();
        prop_assert_eq!(before, after);
    }

    /// 移動後はフィルタが空になり全件表示、各パーティションは整列済み
    #[test]
    fn prop_transfer_resets_filters_and_sorts(
        texts in prop::collection::vec("[a-zA-Z]{1,6}", 1..8),
        pattern in pattern_strategy(),
        moved in prop::collection::vec(0usize..8, 0..4)
    ) {
        let selected = vec![false; texts.len()];
        let mut widget = build(&texts, &selected, 100);
        widget.apply_filter(Partition::Available, &pattern);

        let values: Vec<String> = moved.iter().map(|i| i.to_string()).collect();
        widget.move_partition(values, Partition::Selected);

        for p in Partition::all() {
            prop_assert_eq!(widget.filter_input(p), "");
            let texts: Vec<&str> = widget.items_in(p).map(|i| i.display_text.as_str()).collect();
            let mut sorted = texts.clone();
            sorted.sort();
            prop_assert_eq!(texts, sorted);
        }
        prop_assert!(widget.items().iter().all(|i| i.visible));
    }
}
