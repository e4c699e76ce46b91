//! Playmaker entry point
//!
//! On the web, animates a demo play on the `#field` canvas. Natively, runs the
//! same play headless and logs how it unfolds.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use playmaker::Play;

/// Vertical stack: a break-side cut from the front of the stack, then a
/// deep look to a cutter clearing from the middle.
fn build_demo(play: &mut Play) {
    let o = &mut play.offence.players;
    o[0].start_at(20.0, 95.0).wait(1.0).run(-3.0, -6.0);
    o[1].start_at(20.0, 75.0).wait(0.5).run_at_speed(-12.0, -8.0, 8.0).wait(1.0);
    o[2].start_at(20.0, 65.0).wait(2.0).run_at_speed(10.0, -35.0, 8.0);
    o[3].start_at(20.0, 70.0).wait(1.0).run(8.0, 4.0);
    o[4].start_at(20.0, 60.0).wait(1.2).run(-9.0, -3.0);
    o[5].start_at(20.0, 55.0).wait(0.8).run(10.0, -6.0);
    o[6].start_at(20.0, 50.0).wait(1.5).run(-8.0, -10.0);

    let d = &mut play.defence.players;
    d[0].start_at(21.0, 93.0).wait(1.0).run(-3.0, -6.0);
    for (i, y) in [74.0, 64.0, 69.0, 59.0, 54.0, 49.0].into_iter().enumerate() {
        d[i + 1].start_at(21.5, y).wait(0.6 + 0.2 * i as f32).run(0.0, -5.0);
    }

    let (handler, breaker, deep) = (
        play.offence.players[0].id,
        play.offence.players[1].id,
        play.offence.players[2].id,
    );
    play.give_disc(handler);
    play.throw_disc(1.5, breaker);
    play.throw_disc(3.0, deep);
}

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use wasm_bindgen::prelude::*;

    use playmaker::platform::web::{CanvasSurface, IntervalTimer};
    use playmaker::{Animator, Play, PlayHandle, Settings};

    type WebAnimator = Animator<IntervalTimer>;

    thread_local! {
        static APP: RefCell<Option<(Rc<RefCell<WebAnimator>>, PlayHandle)>> = const { RefCell::new(None) };
    }

    /// Animator whose interval callback ticks itself
    fn web_animator() -> Rc<RefCell<WebAnimator>> {
        Rc::new_cyclic(|weak: &Weak<RefCell<WebAnimator>>| {
            let weak = weak.clone();
            let callback = Closure::<dyn FnMut()>::new(move || {
                if let Some(animator) = weak.upgrade() {
                    animator.borrow_mut().tick();
                }
            });
            RefCell::new(Animator::new(IntervalTimer::new(callback)))
        })
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Playmaker starting...");

        let mut play = Play::with_settings("field", Settings::load());
        super::build_demo(&mut play);
        match CanvasSurface::by_id(play.id()) {
            Some(surface) => play.set_surface(Box::new(surface)),
            None => log::warn!("No canvas '{}', play will not be drawn", play.id()),
        }

        let play: PlayHandle = Rc::new(RefCell::new(play));
        let animator = web_animator();
        animator.borrow_mut().start_game(&play);
        APP.with(|app| *app.borrow_mut() = Some((animator, play)));
    }

    /// Rewind the demo and run it again
    #[wasm_bindgen]
    pub fn replay() {
        APP.with(|app| {
            if let Some((animator, play)) = app.borrow().as_ref() {
                play.borrow_mut().reset();
                animator.borrow_mut().start_game(play);
            }
        });
    }

    /// Toggle pause on the demo
    #[wasm_bindgen]
    pub fn toggle_pause() {
        APP.with(|app| {
            if let Some((_, play)) = app.borrow().as_ref() {
                let mut play = play.borrow_mut();
                if play.is_paused() {
                    play.resume();
                } else {
                    play.pause();
                }
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::cell::RefCell;
    use std::rc::Rc;

    use playmaker::platform::ManualTimer;
    use playmaker::renderer::Recorder;
    use playmaker::{Animator, PlayHandle};

    env_logger::init();
    log::info!("Playmaker (native) starting...");

    let mut play = Play::new("field");
    build_demo(&mut play);
    let recorder = Recorder::new();
    play.set_surface(Box::new(recorder.clone()));
    let end_time = play.end_time();

    let play: PlayHandle = Rc::new(RefCell::new(play));
    let mut animator = Animator::new(ManualTimer::new());
    animator.start_game(&play);

    // Host loop standing in for the periodic timer
    let mut frames = 0u32;
    while animator.is_running() {
        animator.tick();
        frames += 1;
        let play = play.borrow();
        if frames % 50 == 0 {
            log::info!(
                "t={:.2}s possession={:?} draw calls={}",
                play.current_time(),
                play.disc.possession(),
                recorder.take().len()
            );
        }
    }

    let play = play.borrow();
    println!(
        "Play '{}' finished after {} frames (t={:.2}s, scripted end {:.2}s)",
        play.id(),
        frames,
        play.current_time(),
        end_time
    );
    let t = play.current_time();
    for player in &play.offence.players {
        let p = player.path.position(t);
        println!("  {} at ({:.1}, {:.1})", player.id, p.x, p.y);
    }
    let disc = play.disc.position(t);
    println!("  disc {:?} at ({:.1}, {:.1})", play.disc.possession(), disc.x, disc.y);
}
