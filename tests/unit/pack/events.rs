use std::{cell::RefCell, rc::Rc};

use super::*;

fn recorder() -> (Rc<RefCell<Vec<LayoutEvent>>>, impl FnMut(&LayoutEvent) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |ev: &LayoutEvent| sink.borrow_mut().push(*ev))
}

#[test]
fn listeners_only_receive_their_kind() {
    let mut l = Listeners::default();
    let (packs, on_pack) = recorder();
    let (updates, on_update) = recorder();
    l.on(EventKind::Pack, on_pack);
    l.on(EventKind::Update, on_update);

    l.emit(&LayoutEvent::Pack);
    l.emit(&LayoutEvent::Pack);
    l.emit(&LayoutEvent::Update);

    assert_eq!(packs.borrow().len(), 2);
    assert_eq!(*updates.borrow(), vec![LayoutEvent::Update]);
}

#[test]
fn once_listeners_fire_a_single_time() {
    let mut l = Listeners::default();
    let (seen, cb) = recorder();
    l.once(EventKind::Pack, cb);
    assert_eq!(l.len(), 1);

    l.emit(&LayoutEvent::Update);
    assert_eq!(l.len(), 1);

    l.emit(&LayoutEvent::Pack);
    l.emit(&LayoutEvent::Pack);
    assert_eq!(seen.borrow().len(), 1);
    assert!(l.is_empty());
}

#[test]
fn off_unsubscribes() {
    let mut l = Listeners::default();
    let (seen, cb) = recorder();
    let id = l.on(EventKind::Pack, cb);
    assert!(l.off(id));
    assert!(!l.off(id));

    l.emit(&LayoutEvent::Pack);
    assert!(seen.borrow().is_empty());
}

#[test]
fn resize_event_carries_descriptor() {
    let mut l = Listeners::default();
    let (seen, cb) = recorder();
    l.on(EventKind::Resize, cb);

    let bp = BreakpointDescriptor::at(768.0, 3, 10.0);
    l.emit(&LayoutEvent::Resize(bp));
    assert_eq!(*seen.borrow(), vec![LayoutEvent::Resize(bp)]);
    assert_eq!(seen.borrow()[0].kind(), EventKind::Resize);
}

#[test]
fn delivery_follows_registration_order() {
    let mut l = Listeners::default();
    let order = Rc::new(RefCell::new(Vec::new()));
    for n in 0..3 {
        let order = Rc::clone(&order);
        l.on(EventKind::Update, move |_| order.borrow_mut().push(n));
    }
    l.emit(&LayoutEvent::Update);
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}
