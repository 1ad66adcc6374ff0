//! Locale-aware string comparators backed by ICU4X collation.
//!
//! [`locale()`](locale) builds a [`LocaleComparator`] from BCP-47 locale tags and a set
//! of [`CollationOptions`]. Collation semantics (case folding, accent
//! handling, punctuation, numeric runs) are delegated entirely to
//! [`icu_collator`]; this module only adapts them to the [`Comparator`]
//! trait, so the result composes with `reverse`, `key`, `then` and the rest.

use crate::core::Comparator;
use icu_collator::{
    AlternateHandling, CaseFirst as IcuCaseFirst, CaseLevel, Collator, CollatorOptions, Numeric,
    Strength,
};
use icu_locid::Locale;
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Error building a [`LocaleComparator`].
#[derive(Debug, Error)]
pub enum LocaleError {
    /// A supplied locale tag is not valid BCP-47.
    #[error("invalid locale tag `{tag}`: {reason}")]
    InvalidTag {
        /// The offending tag, verbatim.
        tag: String,
        /// The parser's diagnosis.
        reason: icu_locid::ParserError,
    },
    /// The collator itself could not be constructed.
    #[error("collator construction failed: {reason}")]
    Collator {
        /// The underlying collation error.
        reason: icu_collator::CollatorError,
    },
}

/// How many distinctions between strings count as differences.
///
/// Mirrors the `sensitivity` collation option: each level maps onto an ICU
/// comparison strength (plus the case level where needed).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sensitivity {
    /// Only base letters differ: `a` ≠ `b`, but `a` = `á` = `A`.
    Base,
    /// Base letters and accents differ: `a` ≠ `á`, but `a` = `A`.
    Accent,
    /// Base letters and case differ: `a` ≠ `A`, but `a` = `á`.
    Case,
    /// Base letters, accents, and case all differ.
    Variant,
}

/// Whether upper or lower case sorts first among otherwise-equal strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseFirst {
    /// Upper case first: `B` before `b`.
    Upper,
    /// Lower case first: `b` before `B`.
    Lower,
}

/// Options for [`locale()`](locale), passed through to the ICU collator.
///
/// All fields default to the collation's locale defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollationOptions {
    /// Which distinctions count as differences; `None` keeps the locale
    /// default (usually [`Sensitivity::Variant`]).
    pub sensitivity: Option<Sensitivity>,
    /// Compare runs of decimal digits by numeric value, so `"9"` sorts
    /// before `"10"`.
    pub numeric: bool,
    /// Case ordering among otherwise-equal strings; `None` keeps the locale
    /// default.
    pub case_first: Option<CaseFirst>,
    /// Ignore punctuation (and spaces) when comparing.
    pub ignore_punctuation: bool,
}

impl CollationOptions {
    fn to_icu(self) -> CollatorOptions {
        let mut options = CollatorOptions::new();
        match self.sensitivity {
            Some(Sensitivity::Base) => {
                options.strength = Some(Strength::Primary);
                options.case_level = Some(CaseLevel::Off);
            }
            Some(Sensitivity::Accent) => {
                options.strength = Some(Strength::Secondary);
                options.case_level = Some(CaseLevel::Off);
            }
            Some(Sensitivity::Case) => {
                options.strength = Some(Strength::Primary);
                options.case_level = Some(CaseLevel::On);
            }
            Some(Sensitivity::Variant) => {
                options.strength = Some(Strength::Tertiary);
                options.case_level = Some(CaseLevel::Off);
            }
            None => {}
        }
        if self.numeric {
            options.numeric = Some(Numeric::On);
        }
        match self.case_first {
            Some(CaseFirst::Upper) => options.case_first = Some(IcuCaseFirst::UpperFirst),
            Some(CaseFirst::Lower) => options.case_first = Some(IcuCaseFirst::LowerFirst),
            None => {}
        }
        if self.ignore_punctuation {
            options.alternate_handling = Some(AlternateHandling::Shifted);
        }
        options
    }
}

/// A locale-aware comparator over strings.
///
/// Implements [`Comparator`] for anything that views as `str` (`str`,
/// `&str`, `String`, `Box<str>`, ...), and exposes the underlying
/// [`Collator`] for callers that need it directly, for example to bucket
/// strings into equivalence groups.
pub struct LocaleComparator {
    collator: Collator,
}

impl LocaleComparator {
    /// Builds a comparator for the first of `locales`, validating every tag.
    ///
    /// See [`locale()`](locale) for the semantics.
    pub fn new(locales: &[&str], options: CollationOptions) -> Result<Self, LocaleError> {
        let mut chosen: Option<Locale> = None;
        for tag in locales {
            let parsed: Locale = tag.parse().map_err(|reason| LocaleError::InvalidTag {
                tag: (*tag).to_owned(),
                reason,
            })?;
            chosen.get_or_insert(parsed);
        }
        let chosen = chosen.unwrap_or(Locale::UND);
        let collator = Collator::try_new(&chosen.into(), options.to_icu())
            .map_err(|reason| LocaleError::Collator { reason })?;
        Ok(Self { collator })
    }

    /// The underlying ICU collator.
    pub fn collator(&self) -> &Collator {
        &self.collator
    }
}

impl fmt::Debug for LocaleComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleComparator").finish_non_exhaustive()
    }
}

impl<S> Comparator<S> for LocaleComparator
where
    S: AsRef<str> + ?Sized,
{
    fn compare(&self, a: &S, b: &S) -> Ordering {
        self.collator.compare(a.as_ref(), b.as_ref())
    }
}

/// Builds a locale-aware string comparator.
///
/// Every tag in `locales` is validated; the first selects the collation
/// (later tags are fallbacks, which ICU4X data fallback already covers). An
/// empty slice selects the root locale.
///
/// # Errors
///
/// Fails if a tag is not valid BCP-47 or the collator cannot be constructed.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use threeway::{locale, CollationOptions, Comparator, Sensitivity};
///
/// let caseless = locale(
///     &["en"],
///     CollationOptions {
///         sensitivity: Some(Sensitivity::Base),
///         ..Default::default()
///     },
/// )?;
/// assert_eq!(caseless.compare("AAA", "aaa"), Ordering::Equal);
/// assert_eq!(caseless.compare("aaa", "BBB"), Ordering::Less);
/// # Ok::<(), threeway::LocaleError>(())
/// ```
pub fn locale(locales: &[&str], options: CollationOptions) -> Result<LocaleComparator, LocaleError> {
    LocaleComparator::new(locales, options)
}
