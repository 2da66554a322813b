use std::path::Path;

use primeclock::{
    Animator, ChartConfig, ClockTime, Color, DecompositionTable, PolarRenderer, PrimeClock,
    SystemClock,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A darker chart built with the bon-generated builder
    let chart = ChartConfig::builder()
        .width(480)
        .height(520)
        .background_color(Color::new(0x10, 0x10, 0x18))
        .grid_color(Color::new(0x40, 0x40, 0x50))
        .text_color(Color::new(0xe0, 0xe0, 0xe0))
        .series_alpha(0.6)
        .build();

    let clock = PrimeClock::new(
        DecompositionTable::compute()?,
        PolarRenderer::new(chart)?,
        Animator::builder().frames(5).build(),
    );

    let now = ClockTime::new(0, 0, 0).normalize(&SystemClock);
    println!("{}", clock.fingerprint(now)?);

    clock.write(now, Path::new("chart_demo.png"))?;
    clock.write(now, Path::new("chart_demo.gif"))?;
    println!("Wrote chart_demo.png and chart_demo.gif");
    Ok(())
}
