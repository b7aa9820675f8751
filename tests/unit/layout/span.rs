use super::*;
use crate::foundation::core::Size;

fn brick(span: Option<u32>) -> Brick {
    let mut b = Brick::new(Size::new(100.0, 50.0));
    b.set_span(span);
    b
}

#[test]
fn missing_or_zero_span_defaults_to_one() {
    assert_eq!(requested_span(None), 1);
    assert_eq!(requested_span(Some(0)), 1);
    assert_eq!(requested_span(Some(3)), 3);
}

#[test]
fn span_is_clamped_at_right_edge() {
    let mut b = brick(Some(2));
    assert_eq!(resolve_span(&mut b, 3, 2), 1);
}

#[test]
fn span_fits_when_room_remains() {
    let mut b = brick(Some(2));
    assert_eq!(resolve_span(&mut b, 3, 0), 2);
    assert_eq!(resolve_span(&mut b, 3, 1), 2);
}

#[test]
fn first_request_is_sticky() {
    let mut b = brick(Some(2));
    assert_eq!(resolve_span(&mut b, 4, 0), 2);

    b.set_span(Some(4));
    assert_eq!(resolve_span(&mut b, 4, 0), 2);

    b.set_span(None);
    assert_eq!(resolve_span(&mut b, 4, 0), 2);
}

#[test]
fn narrowing_does_not_shrink_the_record() {
    let mut b = brick(Some(3));
    assert_eq!(resolve_span(&mut b, 3, 2), 1);
    assert_eq!(b.recorded_span(), Some(3));
    assert_eq!(resolve_span(&mut b, 3, 0), 3);
}

#[test]
fn span_never_exceeds_remaining_columns() {
    for columns in 1..6usize {
        for target in 0..columns {
            for declared in 1..8u32 {
                let mut b = brick(Some(declared));
                let span = resolve_span(&mut b, columns, target);
                assert!(span >= 1);
                assert!(span as usize <= columns - target);
            }
        }
    }
}
