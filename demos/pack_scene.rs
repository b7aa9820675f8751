use brickwork::{Brick, Container, EventKind, LayoutEvent, Packer, PackerConfigBuilder, Size};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = PackerConfigBuilder::new()
        .base(1, 10.0)
        .at(600.0, 2, 10.0)
        .at(960.0, 3, 10.0)
        .build()?;

    let heights = [180.0, 120.0, 260.0, 90.0, 150.0, 210.0];
    let bricks = heights
        .iter()
        .map(|&h| Brick::new(Size::new(300.0, h)))
        .collect();
    let mut packer = Packer::headless(config, bricks, 1280.0)?;

    packer.on(EventKind::Resize, |ev| {
        if let LayoutEvent::Resize(bp) = ev {
            println!("resized to {} columns", bp.columns);
        }
    });

    packer.pack();
    print_wall(&packer);

    packer.resize(true);
    packer.viewport_mut().set_width(700.0);
    packer.notify_resize();
    if packer.scheduler_mut().take_frame() {
        packer.run_frame();
    }
    print_wall(&packer);
    Ok(())
}

fn print_wall(packer: &Packer<brickwork::Wall>) {
    for (idx, brick) in packer.container().bricks().iter().enumerate() {
        if let Some(p) = brick.placement() {
            println!(
                "#{idx}: column {} span {} at ({}, {})",
                p.column, p.span, p.left, p.top
            );
        }
    }
    if let Some(style) = packer.container().container_style() {
        println!("container {}x{}", style.size.width, style.size.height);
    }
}
