//! Procedural starfield: twinkling background stars plus the occasional
//! shooting star, advanced in 16ms frame units so the look does not depend
//! on the display refresh rate.

use crate::constants::FRAME_MS;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarColor {
    Muted,
    Accent,
    Primary,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub fn star_color(color: StarColor, theme: Theme) -> Rgba {
    let dark = theme == Theme::Dark;
    match color {
        StarColor::Primary if dark => Rgba::new(120, 220, 160, 0.9),
        StarColor::Primary => Rgba::new(60, 140, 90, 0.7),
        StarColor::Accent if dark => Rgba::new(180, 200, 220, 0.7),
        StarColor::Accent => Rgba::new(100, 120, 140, 0.5),
        StarColor::Muted if dark => Rgba::new(200, 200, 210, 0.5),
        StarColor::Muted => Rgba::new(80, 80, 90, 0.25),
    }
}

/// Trail color of a shooting star; alpha is supplied per gradient stop.
pub fn trail_color(theme: Theme) -> Rgba {
    match theme {
        Theme::Dark => Rgba::new(200, 210, 220, 1.0),
        Theme::Light => Rgba::new(60, 70, 80, 1.0),
    }
}

pub fn head_color(theme: Theme, opacity: f32) -> Rgba {
    match theme {
        Theme::Dark => Rgba::new(255, 255, 255, opacity * 0.9),
        Theme::Light => Rgba::new(40, 50, 60, opacity * 0.7),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldConfig {
    /// Stars per square pixel.
    pub density: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub min_opacity: f32,
    pub max_opacity: f32,
    /// Expected twinkle updates per star per second.
    pub twinkle_chance: f32,
    pub primary_chance: f32,
    pub accent_chance: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            density: 0.000_08,
            min_size: 1.0,
            max_size: 2.5,
            min_opacity: 0.15,
            max_opacity: 0.6,
            twinkle_chance: 0.4,
            primary_chance: 0.03,
            accent_chance: 0.08,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShootingStarConfig {
    pub min_interval_ms: f64,
    pub max_interval_ms: f64,
    /// Pixels per frame.
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_length: f32,
    pub max_length: f32,
    /// Fraction of the lifetime spent fading in.
    pub fade_in: f32,
    /// Fraction of the lifetime after which the star fades out.
    pub fade_out_start: f32,
}

impl Default for ShootingStarConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: 3000.0,
            max_interval_ms: 8000.0,
            min_speed: 8.0,
            max_speed: 14.0,
            min_length: 80.0,
            max_length: 160.0,
            fade_in: 0.1,
            fade_out_start: 0.6,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub base_opacity: f32,
    pub twinkle_phase: f32,
    pub twinkle_speed: f32,
    pub color: StarColor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShootingStar {
    pub pos: Vec2,
    /// Pixels per frame.
    pub vel: Vec2,
    pub length: f32,
    pub speed: f32,
    /// Frames lived so far.
    pub life: f32,
    pub max_life: f32,
}

impl ShootingStar {
    pub fn progress(&self) -> f32 {
        if self.max_life > 0.0 {
            self.life / self.max_life
        } else {
            1.0
        }
    }

    /// End of the trail, `length` pixels behind the head.
    pub fn tail(&self) -> Vec2 {
        self.pos - self.vel / self.speed * self.length
    }
}

/// Fade-in, hold, then linear fade-out over the lifetime.
pub fn shooting_star_opacity(progress: f32, cfg: &ShootingStarConfig) -> f32 {
    if progress < cfg.fade_in {
        progress / cfg.fade_in
    } else if progress > cfg.fade_out_start {
        (1.0 - (progress - cfg.fade_out_start) / (1.0 - cfg.fade_out_start)).max(0.0)
    } else {
        1.0
    }
}

pub struct Starfield {
    pub config: StarfieldConfig,
    pub shooting_config: ShootingStarConfig,
    rng: StdRng,
    width: f32,
    height: f32,
    stars: Vec<Star>,
    shooting: SmallVec<[ShootingStar; 4]>,
    next_shooting_ms: Option<f64>,
    last_ms: Option<f64>,
}

impl Starfield {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, StarfieldConfig::default(), ShootingStarConfig::default())
    }

    pub fn with_config(seed: u64, config: StarfieldConfig, shooting_config: ShootingStarConfig) -> Self {
        Self {
            config,
            shooting_config,
            rng: StdRng::seed_from_u64(seed),
            width: 0.0,
            height: 0.0,
            stars: Vec::new(),
            shooting: SmallVec::new(),
            next_shooting_ms: None,
            last_ms: None,
        }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting
    }

    /// Regenerate the background for a new canvas size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let count = (self.width * self.height * self.config.density).floor() as usize;
        self.stars = (0..count).map(|_| self.create_star()).collect();
        log::debug!("[stars] {} stars for {}x{}", count, self.width, self.height);
    }

    fn create_star(&mut self) -> Star {
        let c = &self.config;
        let roll: f32 = self.rng.gen();
        let color = if roll < c.primary_chance {
            StarColor::Primary
        } else if roll < c.primary_chance + c.accent_chance {
            StarColor::Accent
        } else {
            StarColor::Muted
        };
        let (min_o, max_o, min_s, max_s) = (c.min_opacity, c.max_opacity, c.min_size, c.max_size);
        let base_opacity = min_o + self.rng.gen::<f32>() * (max_o - min_o);
        Star {
            pos: Vec2::new(
                self.rng.gen::<f32>() * self.width,
                self.rng.gen::<f32>() * self.height,
            ),
            size: min_s + self.rng.gen::<f32>() * (max_s - min_s),
            opacity: base_opacity,
            base_opacity,
            twinkle_phase: self.rng.gen::<f32>() * TAU,
            twinkle_speed: 0.3 + self.rng.gen::<f32>() * 0.7,
            color,
        }
    }

    fn create_shooting_star(&mut self) -> ShootingStar {
        let c = &self.shooting_config;
        let (min_v, max_v, min_l, max_l) = (c.min_speed, c.max_speed, c.min_length, c.max_length);
        let start = Vec2::new(self.rng.gen::<f32>() * self.width * 0.8, -20.0);
        let angle = PI / 4.0 + self.rng.gen::<f32>() * PI / 6.0;
        let speed = min_v + self.rng.gen::<f32>() * (max_v - min_v);
        ShootingStar {
            pos: start,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            length: min_l + self.rng.gen::<f32>() * (max_l - min_l),
            speed,
            life: 0.0,
            max_life: self.width.max(self.height) * 1.5 / speed,
        }
    }

    fn schedule_next(&mut self, now_ms: f64) {
        let c = &self.shooting_config;
        let span = c.max_interval_ms - c.min_interval_ms;
        let next = now_ms + c.min_interval_ms + self.rng.gen::<f64>() * span;
        self.next_shooting_ms = Some(next);
    }

    /// Advance to `now_ms`: twinkle, spawn and move shooting stars.
    pub fn tick(&mut self, now_ms: f64) {
        let frames = match self.last_ms {
            Some(last) => ((now_ms - last) / FRAME_MS).clamp(0.0, 4.0) as f32,
            None => 1.0,
        };
        self.last_ms = Some(now_ms);
        let next_shooting = *self
            .next_shooting_ms
            .get_or_insert_with(|| now_ms + 1000.0 + self.rng.gen::<f64>() * 2000.0);

        let t_sec = (now_ms / 1000.0) as f32;
        let twinkle_p = self.config.twinkle_chance / 60.0 * frames;
        for star in &mut self.stars {
            if self.rng.gen::<f32>() < twinkle_p {
                let twinkle = (t_sec * star.twinkle_speed + star.twinkle_phase).sin();
                star.opacity = star.base_opacity * (0.6 + 0.4 * twinkle);
            }
        }

        if now_ms > next_shooting && self.width > 0.0 && self.height > 0.0 {
            let star = self.create_shooting_star();
            self.shooting.push(star);
            self.schedule_next(now_ms);
        }

        self.shooting.retain(|s| {
            s.pos += s.vel * frames;
            s.life += frames;
            s.life <= s.max_life
        });
    }
}
