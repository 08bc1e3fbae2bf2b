//! Drifting particle backdrop on `#bgCanvas`.

use std::cell::RefCell;
use std::rc::Rc;

use particles::engine::{Engine, FrameLoop};
use particles::field::Density;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::{Document, HtmlCanvasElement};

use crate::config::SiteConfig;
use crate::error::UiError;
use crate::util::dom;
use crate::util::wiring::Wiring;

pub fn wire(doc: &Document, config: &SiteConfig) -> Result<Wiring, UiError> {
    let canvas: HtmlCanvasElement = dom::by_id(doc, "bgCanvas")?;
    let window = dom::window()?;
    let density = Density {
        area_per_particle: config.particles.area_per_particle,
        min_count: config.particles.min_count,
    };
    let seed = js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits();
    let mut rng = SmallRng::seed_from_u64(seed);
    let engine = Rc::new(RefCell::new(Engine::new(canvas, density, &mut rng)?));
    let frames = FrameLoop::start(Rc::clone(&engine));

    let mut wiring = Wiring::new("particles");
    wiring.on(&window, "resize", move |_| engine.borrow_mut().sync_size());
    wiring.on_stop(move || frames.stop());
    Ok(wiring)
}
