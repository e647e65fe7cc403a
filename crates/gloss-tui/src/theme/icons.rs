//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves glyphs at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use gloss_app::IconMode;
use gloss_core::IconKind;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for a glossary term icon
    pub fn glyph(&self, kind: IconKind) -> &'static str {
        match self.mode {
            IconMode::Unicode => unicode_glyph(kind),
            IconMode::NerdFonts => nerd_glyph(kind),
        }
    }

    /// Disclosure marker for a panel header
    pub fn chevron(&self, open: bool) -> &'static str {
        match (self.mode, open) {
            (IconMode::NerdFonts, true) => "\u{f078}",  // nf-fa-chevron_down
            (IconMode::NerdFonts, false) => "\u{f054}", // nf-fa-chevron_right
            (IconMode::Unicode, true) => "\u{25be}",    // ▾
            (IconMode::Unicode, false) => "\u{25b8}",   // ▸
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode => "/",
        }
    }

    pub fn bullet(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{2022}",   // •
        }
    }

    pub fn link(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c1}", // nf-fa-link
            IconMode::Unicode => "\u{2192}",   // →
        }
    }
}

fn unicode_glyph(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Brain => "\u{25c9}",      // ◉
        IconKind::Database => "\u{2263}",   // ≣
        IconKind::BarChart => "\u{25a5}",   // ▥
        IconKind::LineChart => "\u{27cb}",  // ⟋
        IconKind::PieChart => "\u{25d4}",   // ◔
        IconKind::Network => "\u{22c8}",    // ⋈
        IconKind::Cpu => "\u{25a3}",        // ▣
        IconKind::Sigma => "\u{03a3}",      // Σ
        IconKind::Calculator => "\u{00b1}", // ±
        IconKind::Layers => "\u{2261}",     // ≡
        IconKind::Target => "\u{25ce}",     // ◎
        IconKind::TrendingUp => "\u{2197}", // ↗
        IconKind::BookOpen => "\u{2750}",   // ❐
        IconKind::Lightbulb => "\u{2726}",  // ✦
        IconKind::Shuffle => "\u{21c4}",    // ⇄
        IconKind::Grid => "\u{229e}",       // ⊞
        IconKind::Cloud => "\u{2601}",      // ☁
        IconKind::Shield => "\u{25c8}",     // ◈
        IconKind::Eye => "\u{2299}",        // ⊙
        IconKind::Dice => "\u{2684}",       // ⚄
    }
}

fn nerd_glyph(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Brain => "\u{f09d1}",     // nf-md-brain
        IconKind::Database => "\u{f1c0}",   // nf-fa-database
        IconKind::BarChart => "\u{f080}",   // nf-fa-bar_chart
        IconKind::LineChart => "\u{f201}",  // nf-fa-line_chart
        IconKind::PieChart => "\u{f200}",   // nf-fa-pie_chart
        IconKind::Network => "\u{f0e8}",    // nf-fa-sitemap
        IconKind::Cpu => "\u{f2db}",        // nf-fa-microchip
        IconKind::Sigma => "\u{f04a0}",     // nf-md-sigma
        IconKind::Calculator => "\u{f1ec}", // nf-fa-calculator
        IconKind::Layers => "\u{f0328}",    // nf-md-layers
        IconKind::Target => "\u{f04fe}",    // nf-md-target
        IconKind::TrendingUp => "\u{f0535}", // nf-md-trending_up
        IconKind::BookOpen => "\u{f02d}",   // nf-fa-book
        IconKind::Lightbulb => "\u{f0eb}",  // nf-fa-lightbulb_o
        IconKind::Shuffle => "\u{f074}",    // nf-fa-random
        IconKind::Grid => "\u{f00a}",       // nf-fa-th
        IconKind::Cloud => "\u{f0c2}",      // nf-fa-cloud
        IconKind::Shield => "\u{f132}",     // nf-fa-shield
        IconKind::Eye => "\u{f06e}",        // nf-fa-eye
        IconKind::Dice => "\u{f01ce}",      // nf-md-dice_5
    }
}
