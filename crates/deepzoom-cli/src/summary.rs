use console::Style;
use deepzoom_core::planner::{TilePlan, TilePlanner};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    active: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            active: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_planner_summary(planner: &TilePlanner) {
    let s = Styles::new();
    let image = planner.descriptor();
    let fitted = planner.fitted();
    let range = planner.range();

    println!();
    println!("  {}", s.title.apply_to("Deep Zoom Image"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Base URL"),
        s.path.apply_to(&image.url)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value
            .apply_to(format!("{}x{}", image.size.width, image.size.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Tiles"),
        s.value
            .apply_to(format!("{} px {}", image.tile_size, image.format))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Fitted"),
        s.value
            .apply_to(format!("{}x{}", fitted.width, fitted.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Max zoom"),
        s.value.apply_to(format!("{:.2}x", planner.max_zoom_scale()))
    );
    println!();

    println!("  {}", s.header.apply_to("Pyramid"));
    for (index, level) in planner.pyramid().iter() {
        let cols = level.width.div_ceil(image.tile_size);
        let rows = level.height.div_ceil(image.tile_size);
        let dims = format!("{}x{}", level.width, level.height);
        let grid = format!("{cols}x{rows} tiles");
        if range.contains(index) {
            println!(
                "    {:>3}  {:<14}{}",
                s.active.apply_to(index),
                s.value.apply_to(dims),
                s.active.apply_to(grid)
            );
        } else {
            println!(
                "    {:>3}  {:<14}{}",
                s.label.apply_to(index),
                s.disabled.apply_to(dims),
                s.disabled.apply_to(grid)
            );
        }
    }
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Render range"),
        s.active
            .apply_to(format!("{}..={}", range.min_level, range.max_level))
    );
    println!();
}

pub fn print_tile_plan(index: usize, plan: &TilePlan, urls: bool) {
    let s = Styles::new();

    println!();
    println!(
        "  {} {}",
        s.header.apply_to(format!("Update #{index}")),
        s.label.apply_to(format!(
            "zoom {:.2}x, {} tile(s), digest {:016x}",
            plan.zoom_scale,
            plan.tile_count(),
            plan.digest
        ))
    );
    for level in &plan.levels {
        let grid = &level.grid;
        println!(
            "    {:<8}{}  {}",
            s.label.apply_to(format!("L{}", level.level)),
            s.value.apply_to(format!(
                "cols {}..={} rows {}..={}",
                grid.min_col, grid.max_col, grid.min_row, grid.max_row
            )),
            s.label.apply_to(format!(
                "of {}x{}, {} tile(s)",
                grid.num_cols,
                grid.num_rows,
                level.tiles.len()
            ))
        );
        if urls {
            for tile in &level.tiles {
                println!(
                    "      {}  {}",
                    s.path.apply_to(&tile.url),
                    s.label.apply_to(format!(
                        "{}x{} @ {},{}",
                        tile.placement.width,
                        tile.placement.height,
                        tile.placement.left,
                        tile.placement.top
                    ))
                );
            }
        }
    }
}
