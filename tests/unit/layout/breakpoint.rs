use super::*;

fn tablet_and_phone() -> Breakpoints {
    Breakpoints::from_config(&PackerConfig::new(vec![
        BreakpointDescriptor::at(0.0, 1, 10.0),
        BreakpointDescriptor::at(768.0, 3, 10.0),
    ]))
    .unwrap()
}

#[test]
fn narrow_viewport_selects_single_column() {
    let bps = tablet_and_phone();
    let active = bps.resolve(&FixedViewport::new(500.0));
    assert_eq!(active.descriptor.columns, 1);
}

#[test]
fn widest_matching_breakpoint_wins() {
    let bps = Breakpoints::from_config(&PackerConfig::new(vec![
        BreakpointDescriptor::base(1, 0.0),
        BreakpointDescriptor::at(600.0, 2, 0.0),
        BreakpointDescriptor::at(900.0, 3, 0.0),
    ]))
    .unwrap();

    assert_eq!(bps.resolve(&FixedViewport::new(1200.0)).descriptor.columns, 3);
    assert_eq!(bps.resolve(&FixedViewport::new(900.0)).descriptor.columns, 3);
    assert_eq!(bps.resolve(&FixedViewport::new(899.0)).descriptor.columns, 2);
    assert_eq!(bps.resolve(&FixedViewport::new(10.0)).descriptor.columns, 1);
}

#[test]
fn unmatched_viewport_falls_back_to_base() {
    let bps = Breakpoints::from_config(&PackerConfig::new(vec![
        BreakpointDescriptor::base(2, 4.0),
        BreakpointDescriptor::at(1000.0, 5, 4.0),
    ]))
    .unwrap();
    let active = bps.resolve(&FixedViewport::new(300.0));
    assert_eq!(active.index, 1);
    assert_eq!(active.descriptor, BreakpointDescriptor::base(2, 4.0));
}

#[test]
fn base_descriptor_never_matches_by_itself() {
    let bps = Breakpoints::from_config(&PackerConfig::new(vec![
        BreakpointDescriptor::base(2, 0.0),
    ]))
    .unwrap();
    assert_eq!(bps.resolve_index(&FixedViewport::new(5000.0)), 0);
}

#[test]
fn resolution_is_idempotent() {
    let bps = tablet_and_phone();
    let vp = FixedViewport::new(800.0);
    assert_eq!(bps.resolve_index(&vp), bps.resolve_index(&vp));
}

#[test]
fn empty_scan_order_is_rejected() {
    assert!(Breakpoints::from_scan_order(vec![]).is_err());
}

#[test]
fn viewport_width_can_change() {
    let bps = tablet_and_phone();
    let mut vp = FixedViewport::new(500.0);
    let narrow = bps.resolve_index(&vp);
    vp.set_width(1024.0);
    assert_ne!(bps.resolve_index(&vp), narrow);
}
