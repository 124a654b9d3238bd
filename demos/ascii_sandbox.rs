use physics_sandbox::render::{RecordingSurface, RegionState};
use physics_sandbox::{Aabb, Point2, Sandbox, SandboxConfig, Vector2};
use std::io::{stdout, Write};
use std::thread::sleep;
use std::time::{Duration, Instant};
use crossterm::{
    ExecutableCommand, QueueableCommand,
    terminal::{Clear, ClearType, size},
    cursor::{Hide, Show, MoveTo},
    style::{Color, Print, SetForegroundColor, ResetColor},
};

const FRAME_DURATION: Duration = Duration::from_millis(33); // ~30 FPS
const SIMULATION_DURATION: f32 = 20.0; // seconds
const SPAWN_INTERVAL: f32 = 1.0;
const RESIZE_AT: f32 = 10.0;

/// Whether a world-space point falls inside a (possibly rotated) top-level region
fn region_contains(region: &RegionState, point: Point2) -> bool {
    let center = region.center();
    let (sin, cos) = (-region.rotation.to_radians()).sin_cos();
    let d = point - center;
    let local = Vector2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos);
    let half = region.size * 0.5;

    if region.texture.is_some() {
        // Textured regions hold circles
        local.norm() <= half.x
    } else {
        local.x.abs() <= half.x && local.y.abs() <= half.y
    }
}

fn to_term_color(color: physics_sandbox::Color) -> Color {
    Color::Rgb {
        r: (color.r * 255.0) as u8,
        g: (color.g * 255.0) as u8,
        b: (color.b * 255.0) as u8,
    }
}

fn draw(
    out: &mut impl Write,
    sandbox: &Sandbox<RecordingSurface>,
    cols: u16,
    rows: u16,
    view: &Aabb,
) -> Result<(), std::io::Error> {
    let surface = sandbox.surface();
    // Panels are transparent; draw them in their child's colour
    let children: Vec<&RegionState> = surface
        .regions()
        .filter(|(_, state)| state.parent.is_some())
        .map(|(_, state)| state)
        .collect();

    for row in 0..rows.saturating_sub(1) {
        out.queue(MoveTo(0, row))?;
        for col in 0..cols {
            let point = view.lerp(
                (col as f32 + 0.5) / cols as f32,
                1.0 - (row as f32 + 0.5) / (rows - 1) as f32,
            );

            let hit = surface
                .regions()
                .filter(|(_, state)| state.parent.is_none())
                .find(|(_, state)| region_contains(state, point));

            match hit {
                Some((id, state)) => {
                    let color = children
                        .iter()
                        .find(|child| child.parent == Some(id))
                        .map_or(state.color, |child| child.color);
                    let glyph = if state.texture.is_some() { '●' } else { '█' };
                    out.queue(SetForegroundColor(to_term_color(color)))?;
                    out.queue(Print(glyph))?;
                }
                None => {
                    let area = sandbox.area();
                    let on_wall = (point.x - area.min.x).abs() < 10.0
                        || (point.x - area.max.x).abs() < 10.0
                        || (point.y - area.min.y).abs() < 10.0
                        || (point.y - area.max.y).abs() < 10.0;
                    out.queue(ResetColor)?;
                    out.queue(Print(if on_wall && area.contains_point(point) { '#' } else { ' ' }))?;
                }
            }
        }
    }

    out.queue(MoveTo(0, rows - 1))?;
    out.queue(ResetColor)?;
    out.queue(Print(format!(
        "t={:5.2}s  circles={}  pick: {}  box: {}",
        sandbox.world().get_time(),
        sandbox.spawner().circle_count(),
        sandbox.last_pick_text(),
        sandbox.box_status().unwrap_or_default(),
    )))?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SandboxConfig::load(path)?,
        None => SandboxConfig {
            circle_capacity: Some(25),
            ..SandboxConfig::default()
        },
    };

    let view = config.area;
    let mut sandbox = Sandbox::new(config, RecordingSurface::new())?;
    let mut rng = rand::thread_rng();

    let mut stdout = stdout();
    stdout.execute(Hide)?;
    stdout.execute(Clear(ClearType::All))?;
    let (cols, rows) = size()?;

    let start_time = Instant::now();
    let mut last_frame = Instant::now();
    let mut last_spawn = 0.0;
    let mut resized = false;

    while start_time.elapsed().as_secs_f32() < SIMULATION_DURATION {
        let elapsed = last_frame.elapsed().as_secs_f32();
        last_frame = Instant::now();
        let now = start_time.elapsed().as_secs_f32();

        if now - last_spawn >= SPAWN_INTERVAL {
            sandbox.spawn_random_circle(&mut rng)?;
            let tap = view.lerp(0.5, 0.5);
            sandbox.on_tap(tap);
            last_spawn = now;
        }

        if !resized && now >= RESIZE_AT {
            // Squeeze the playable area from the right
            let area = sandbox.area();
            sandbox.on_resize(Aabb::new(area.min, Point2::new(area.max.x * 0.75, area.max.y)))?;
            resized = true;
        }

        sandbox.tick(elapsed);
        for event in sandbox.drain_events() {
            log::debug!("{:?}", event);
        }

        draw(&mut stdout, &sandbox, cols, rows, &view)?;

        if let Some(remaining) = FRAME_DURATION.checked_sub(last_frame.elapsed()) {
            sleep(remaining);
        }
    }

    stdout.execute(ResetColor)?;
    stdout.execute(Show)?;
    stdout.execute(MoveTo(0, rows))?;
    println!();
    Ok(())
}
