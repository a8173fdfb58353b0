use crate::audio::Chime;
use crate::render::View;
use crate::storage::LocalStorage;
use cemetery_core::{Cemetery, Profile};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the page listeners share for one session.
pub struct App {
    pub cemetery: Cemetery<LocalStorage>,
    pub view: View,
    pub document: web::Document,
    pub rng: StdRng,
    pub chime: Chime,
    /// Pending long-press `setTimeout` handle; at most one at a time.
    pub long_press_timer: Option<i32>,
}

pub type SharedApp = Rc<RefCell<App>>;

impl App {
    pub fn new(document: web::Document, profile: Profile, seed: u64) -> Self {
        let view = View::for_profile(&profile);
        Self {
            cemetery: Cemetery::new(profile, LocalStorage),
            view,
            document,
            rng: StdRng::seed_from_u64(seed),
            chime: Chime::default(),
            long_press_timer: None,
        }
    }

    pub fn clear_long_press_timer(&mut self) {
        if let Some(handle) = self.long_press_timer.take() {
            crate::dom::clear_timeout(handle);
        }
    }
}

/// Profile named by `<body data-profile>`, else guessed from the markup.
pub fn detect_profile(document: &web::Document) -> Profile {
    let named = document
        .body()
        .and_then(|b| b.get_attribute("data-profile"))
        .and_then(|name| Profile::from_name(&name));
    if let Some(profile) = named {
        return profile;
    }
    match document.query_selector("a-scene") {
        Ok(Some(_)) => Profile::blocky_3d(),
        _ => Profile::perspective_2d(),
    }
}
