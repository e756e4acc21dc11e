use unicode_bidi::{BidiInfo, LTR_LEVEL, Level, RTL_LEVEL};

/// Base direction hint for paragraph analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseDirection {
    /// Detect paragraph base direction from text (first strong char).
    Auto,
    /// Force overall left-to-right base direction.
    Ltr,
    /// Force overall right-to-left base direction.
    Rtl,
}

impl BaseDirection {
    pub fn to_level(self) -> Option<Level> {
        match self {
            BaseDirection::Auto => None,
            BaseDirection::Ltr => Some(LTR_LEVEL),
            BaseDirection::Rtl => Some(RTL_LEVEL),
        }
    }
}

/// Per-line paragraph flow direction.
///
/// Decides which physical edge is "start" and which is "end" when a
/// background segment is measured and painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphDirection {
    Ltr,
    Rtl,
}

impl ParagraphDirection {
    /// Signed direction factor: `+1` for LTR, `-1` for RTL.
    ///
    /// Used to flip the sign of the asymmetric horizontal padding
    /// applied at measured span edges.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            ParagraphDirection::Ltr => 1.0,
            ParagraphDirection::Rtl => -1.0,
        }
    }

    #[inline]
    pub fn is_rtl(self) -> bool {
        matches!(self, ParagraphDirection::Rtl)
    }

    /// Detect the direction of one paragraph of text (UAX-9 via
    /// `unicode-bidi`), honoring an explicit base-direction override.
    pub fn detect(paragraph: &str, base_dir: BaseDirection) -> Self {
        if paragraph.is_empty() {
            return match base_dir {
                BaseDirection::Rtl => ParagraphDirection::Rtl,
                _ => ParagraphDirection::Ltr,
            };
        }
        let info = BidiInfo::new(paragraph, base_dir.to_level());
        let rtl = info
            .paragraphs
            .first()
            .map(|para| para.level.is_rtl())
            .unwrap_or(false);
        if rtl {
            ParagraphDirection::Rtl
        } else {
            ParagraphDirection::Ltr
        }
    }
}
