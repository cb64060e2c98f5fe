use route_core::{Action, Event, Segment, State};

#[test]
fn looted_soul_value_moves_to_spendable_on_use() {
    let trace = Segment::new("soul item lifecycle")
        .add(Action::loot("Soul of a Lost Undead").souls(200))
        .add(Action::use_menu("Soul of a Lost Undead"))
        .process()
        .unwrap();

    // After the loot the value is banked, not spendable
    let looted = &trace.events()[0].state;
    assert_eq!(looted.souls, 0);
    assert_eq!(looted.item_souls, 200);
    assert_eq!(looted.item_count("Soul of a Lost Undead"), 1);

    // Consuming the item converts it at the recorded rate
    let used = &trace.events()[1].state;
    assert_eq!(used.souls, 200);
    assert_eq!(used.item_souls, 0);
    assert_eq!(used.item_count("Soul of a Lost Undead"), 0);
    assert_eq!(trace.error_count(), 0);
}

#[test]
fn overspending_is_reported_once_while_the_balance_stands() {
    let trace = Segment::new("shopping on credit")
        .add(Action::kill("Bell Gargoyles", 300))
        .add(Action::buy("Reinforced Club", 350))
        .add(Action::run_to("Firelink Shrine"))
        .add(Action::run_to("New Londo Ruins"))
        .process()
        .unwrap();

    let errors: Vec<&Event> = trace
        .iter()
        .filter(|event| event.record.is_error())
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].record.target(), "insufficient amount: souls(-50)");
    assert_eq!(trace.final_state().souls, -50);
    assert_eq!(trace.error_count(), 1);
}

#[test]
fn a_standing_item_deficit_is_reported_once_over_three_actions() {
    let trace = Segment::new("threw bombs it never had")
        .add(Action::use_menu("Firebomb").count(2))
        .add(Action::run_to("Undead Burg"))
        .add(Action::run_to("Undead Parish"))
        .process()
        .unwrap();

    let messages: Vec<&str> = trace
        .iter()
        .filter(|event| event.record.is_error())
        .map(|event| event.record.target())
        .collect();
    assert_eq!(messages, ["insufficient amount: Firebomb(-2)"]);
    assert_eq!(trace.final_state().item_count("Firebomb"), -2);
}

#[test]
fn bonfire_region_conflict_mentions_both_regions_once() {
    let trace = Segment::new("mislabeled bonfire")
        .add(Action::region("Firelink Shrine"))
        .add(Action::bonfire_sit("Firelink Shrine"))
        .add(Action::region("Undead Burg"))
        .add(Action::bonfire_sit("Firelink Shrine"))
        .process()
        .unwrap();

    let messages: Vec<&str> = trace
        .iter()
        .filter(|event| event.record.is_error())
        .map(|event| event.record.target())
        .collect();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Firelink Shrine"));
    assert!(messages[0].contains("Undead Burg"));

    // The first-seen binding survives the conflict
    assert_eq!(
        trace.final_state().bonfire_region("Firelink Shrine"),
        Some("Firelink Shrine")
    );
}

#[test]
fn equip_unequip_round_trip_leaves_the_slot_empty() {
    let trace = Segment::new("menu fidgeting")
        .add(Action::loot("Hand Axe"))
        .add(Action::equip("Hand Axe", "Right Hand"))
        .add(Action::unequip("Right Hand").expecting("Hand Axe"))
        .process()
        .unwrap();

    let state = trace.final_state();
    assert_eq!(state.equipped("Right Hand"), None);
    assert_eq!(state.item_count("Hand Axe"), 1);
    assert_eq!(state.souls, 0);
    assert_eq!(state.item_souls, 0);
    assert_eq!(state.humanity, 0);
    assert_eq!(state.item_humanities, 0);
    assert_eq!(trace.error_count(), 0);
}

#[test]
fn soul_deltas_are_exact() {
    let trace = Segment::new("ledger")
        .add(Action::kill("Asylum Demon", 2000))
        .add(Action::buy("Homeward Bone", 500))
        .add(Action::loot("Large Soul of a Lost Undead").souls(400))
        .add(Action::kill("Taurus Demon", 3000))
        .process()
        .unwrap();

    let souls: Vec<i64> = trace.iter().map(|event| event.state.souls).collect();
    assert_eq!(souls, [2000, 1500, 1500, 4500]);

    let banked: Vec<i64> = trace.iter().map(|event| event.state.item_souls).collect();
    assert_eq!(banked, [0, 0, 400, 400]);
}

#[test]
fn identical_traces_for_repeated_replays() {
    let segment = Segment::new("flawed but repeatable")
        .add(Action::region("Firelink Shrine"))
        .add(Action::auto_bonfire("Firelink Shrine"))
        .add(Action::buy("Homeward Bone", 500))
        .add(Action::use_menu("Homeward Bone"))
        .add(Action::equip("Darksign", "Item 5"));

    let first = segment.process().unwrap();
    let second = segment.process().unwrap();
    assert_eq!(first, second);
    assert!(first.error_count() > 0);
}

#[test]
fn a_replay_can_continue_from_an_earlier_final_state() {
    let opening = Segment::new("opening")
        .add(Action::region("Firelink Shrine"))
        .add(Action::auto_bonfire("Firelink Shrine"))
        .add(Action::kill("Asylum Demon", 2000));
    let finished = opening.process().unwrap();

    let continuation = Segment::new("continuation")
        .add(Action::region("Undead Parish"))
        .add(Action::warp_to("Firelink Shrine"));

    // Standalone, the warp destination was never sat at
    assert!(continuation.process().is_err());

    let resumed = continuation
        .process_from(finished.final_state().clone())
        .unwrap();
    assert_eq!(resumed.final_state().region, "Firelink Shrine");
    assert_eq!(resumed.final_state().souls, 2000);
}

#[test]
fn earlier_snapshots_keep_their_values() {
    let trace = Segment::new("isolation")
        .add(Action::region("Firelink Shrine"))
        .add(Action::auto_bonfire("Firelink Shrine"))
        .add(Action::kill("Asylum Demon", 2000))
        .add(Action::use_menu("Darksign"))
        .process()
        .unwrap();

    assert_eq!(trace.events()[2].state.souls, 2000);
    assert_eq!(trace.events()[3].state.souls, 0);
    assert_eq!(trace.final_state().souls, 0);
}

#[test]
fn state_defaults_are_empty() {
    let state = State::new();
    assert_eq!(state.souls, 0);
    assert_eq!(state.item_count("anything"), 0);
    assert_eq!(state.bonfire, "");
    assert_eq!(state.region, "");
}
