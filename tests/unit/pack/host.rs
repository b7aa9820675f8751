use super::*;
use crate::pack::style::Offset;

#[test]
fn unpacked_lists_fresh_bricks_in_order() {
    let mut wall = Wall::from_sizes([Size::new(10.0, 10.0); 3]);
    assert_eq!(wall.unpacked(), vec![0, 1, 2]);

    wall.bricks_mut()[1].place(crate::Placement {
        top: 0.0,
        left: 0.0,
        span: 1,
        column: 0,
    });
    assert_eq!(wall.unpacked(), vec![0, 2]);
}

#[test]
fn wall_records_applied_styles() {
    let mut wall = Wall::from_sizes([Size::new(10.0, 10.0)]);
    assert!(wall.style(0).is_none());

    let style = BrickStyle {
        offset: Offset::TopLeft {
            top: 1.0,
            left: 2.0,
        },
        span: 1,
        packed_attribute: "data-packed".to_string(),
    };
    wall.apply_brick_style(0, &style);
    wall.apply_brick_style(5, &style);
    assert_eq!(wall.style(0), Some(&style));

    let cs = ContainerStyle {
        size: Size::new(10.0, 10.0),
    };
    wall.apply_container_style(&cs);
    assert_eq!(wall.container_style(), Some(&cs));
}

#[test]
fn pushed_bricks_start_unstyled() {
    let mut wall = Wall::default();
    assert!(wall.is_empty());
    wall.push(Brick::new(Size::new(5.0, 5.0)).with_span(2));
    assert_eq!(wall.len(), 1);
    assert_eq!(wall.brick(0).and_then(Brick::span), Some(2));
    assert!(wall.style(0).is_none());
}
