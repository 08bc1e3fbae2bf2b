//! Pointer-driven card tilt and hero parallax.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent};

use crate::error::UiError;
use crate::state::tilt::{CardTransform, NEUTRAL, ParallaxParams, TiltParams, card_tilt, hero_parallax};
use crate::util::dom;
use crate::util::wiring::Wiring;

const CARD_SELECTOR: &str = ".card";
const CARD_BODY_SELECTOR: &str = ".card-body";
const HERO_ART_SELECTOR: &str = ".character";

fn pointer(event: &Event) -> Option<(f64, f64)> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some((f64::from(event.client_x()), f64::from(event.client_y())))
}

fn apply_card(card: &Element, body: Option<&Element>, transform: &CardTransform) {
    dom::set_style(card, "transform", &transform.card);
    if let Some(body) = body {
        dom::set_style(body, "transform", &transform.body);
    }
}

pub fn wire(doc: &Document) -> Result<Wiring, UiError> {
    let cards = dom::query_all(doc, CARD_SELECTOR);
    let hero = dom::by_id::<Element>(doc, "hero").ok();
    if cards.is_empty() && hero.is_none() {
        return Err(UiError::Missing(CARD_SELECTOR));
    }

    let mut wiring = Wiring::new("tilt");
    for card in cards {
        let body = dom::query_in(&card, CARD_BODY_SELECTOR);
        let (moving, moving_body) = (card.clone(), body.clone());
        wiring.on(&card, "pointermove", move |event| {
            let Some((x, y)) = pointer(event) else {
                return;
            };
            let transform = card_tilt(TiltParams::default(), dom::bounds(&moving), x, y);
            apply_card(&moving, moving_body.as_ref(), &transform);
        });
        let leaving = card.clone();
        wiring.on(&card, "pointerleave", move |_| apply_card(&leaving, body.as_ref(), &CardTransform::neutral()));
    }

    if let Some(hero) = hero {
        if let Some(art) = dom::query_in(&hero, HERO_ART_SELECTOR) {
            let (area, moving) = (hero.clone(), art.clone());
            wiring.on(&hero, "pointermove", move |event| {
                if let Some((x, y)) = pointer(event) {
                    dom::set_style(&moving, "transform", &hero_parallax(ParallaxParams::default(), dom::bounds(&area), x, y));
                }
            });
            wiring.on(&hero, "pointerleave", move |_| dom::set_style(&art, "transform", NEUTRAL));
        }
    }
    Ok(wiring)
}
