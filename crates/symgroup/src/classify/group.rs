//! Point group names.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::Error;

/// Finite 3D point group. Axial variants carry the fold `n` of the
/// principal axis; `S2n(n)` is the group generated by a `2n`-fold rotary
/// reflection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointGroup {
    Cn(u32),
    Cnh(u32),
    Cnv(u32),
    S2n(u32),
    Dn(u32),
    Dnh(u32),
    Dnd(u32),
    T,
    Td,
    Th,
    O,
    Oh,
    I,
    Ih,
}

/// Point group family without the fold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupFamily {
    Cn,
    Cnh,
    Cnv,
    S2n,
    Dn,
    Dnh,
    Dnd,
    T,
    Td,
    Th,
    O,
    Oh,
    I,
    Ih,
}

impl GroupFamily {
    pub fn is_axial(self) -> bool {
        use GroupFamily::*;
        matches!(self, Cn | Cnh | Cnv | S2n | Dn | Dnh | Dnd)
    }

    /// Group with this family and fold; `n` is ignored for polyhedral families.
    pub fn with_fold(self, n: u32) -> PointGroup {
        match self {
            GroupFamily::Cn => PointGroup::Cn(n),
            GroupFamily::Cnh => PointGroup::Cnh(n),
            GroupFamily::Cnv => PointGroup::Cnv(n),
            GroupFamily::S2n => PointGroup::S2n(n),
            GroupFamily::Dn => PointGroup::Dn(n),
            GroupFamily::Dnh => PointGroup::Dnh(n),
            GroupFamily::Dnd => PointGroup::Dnd(n),
            GroupFamily::T => PointGroup::T,
            GroupFamily::Td => PointGroup::Td,
            GroupFamily::Th => PointGroup::Th,
            GroupFamily::O => PointGroup::O,
            GroupFamily::Oh => PointGroup::Oh,
            GroupFamily::I => PointGroup::I,
            GroupFamily::Ih => PointGroup::Ih,
        }
    }
}

impl PointGroup {
    pub fn family(self) -> GroupFamily {
        match self {
            PointGroup::Cn(_) => GroupFamily::Cn,
            PointGroup::Cnh(_) => GroupFamily::Cnh,
            PointGroup::Cnv(_) => GroupFamily::Cnv,
            PointGroup::S2n(_) => GroupFamily::S2n,
            PointGroup::Dn(_) => GroupFamily::Dn,
            PointGroup::Dnh(_) => GroupFamily::Dnh,
            PointGroup::Dnd(_) => GroupFamily::Dnd,
            PointGroup::T => GroupFamily::T,
            PointGroup::Td => GroupFamily::Td,
            PointGroup::Th => GroupFamily::Th,
            PointGroup::O => GroupFamily::O,
            PointGroup::Oh => GroupFamily::Oh,
            PointGroup::I => GroupFamily::I,
            PointGroup::Ih => GroupFamily::Ih,
        }
    }

    /// Fold of the principal axis (axial families only).
    pub fn fold(self) -> Option<u32> {
        match self {
            PointGroup::Cn(n)
            | PointGroup::Cnh(n)
            | PointGroup::Cnv(n)
            | PointGroup::S2n(n)
            | PointGroup::Dn(n)
            | PointGroup::Dnh(n)
            | PointGroup::Dnd(n) => Some(n),
            _ => None,
        }
    }

    /// Number of elements of the group.
    pub fn order(self) -> usize {
        match self {
            PointGroup::Cn(n) => n as usize,
            PointGroup::Cnh(n) | PointGroup::Cnv(n) | PointGroup::S2n(n) | PointGroup::Dn(n) => {
                2 * n as usize
            }
            PointGroup::Dnh(n) | PointGroup::Dnd(n) => 4 * n as usize,
            PointGroup::T => 12,
            PointGroup::Td | PointGroup::Th | PointGroup::O => 24,
            PointGroup::Oh => 48,
            PointGroup::I => 60,
            PointGroup::Ih => 120,
        }
    }

    /// Contains no orientation reversing element.
    pub fn is_chiral(self) -> bool {
        matches!(
            self,
            PointGroup::Cn(_) | PointGroup::Dn(_) | PointGroup::T | PointGroup::O | PointGroup::I
        )
    }
}

impl fmt::Display for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PointGroup::Cn(n) => write!(f, "C{n}"),
            PointGroup::Cnh(n) => write!(f, "C{n}h"),
            PointGroup::Cnv(n) => write!(f, "C{n}v"),
            PointGroup::S2n(n) => write!(f, "S{}", 2 * n),
            PointGroup::Dn(n) => write!(f, "D{n}"),
            PointGroup::Dnh(n) => write!(f, "D{n}h"),
            PointGroup::Dnd(n) => write!(f, "D{n}d"),
            PointGroup::T => f.write_str("T"),
            PointGroup::Td => f.write_str("Td"),
            PointGroup::Th => f.write_str("Th"),
            PointGroup::O => f.write_str("O"),
            PointGroup::Oh => f.write_str("Oh"),
            PointGroup::I => f.write_str("I"),
            PointGroup::Ih => f.write_str("Ih"),
        }
    }
}

impl Serialize for PointGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Family plus fold, where the fold may be left open (`*`).
///
/// Syntax: `T`, `Td`, `Th`, `O`, `Oh`, `I`, `Ih`, and `C<k>`, `C<k>h`,
/// `C<k>v`, `S<k>`, `D<k>`, `D<k>h`, `D<k>d` with `<k>` a positive integer or
/// `*`. For `S<k>`, `k` is the order of the rotary reflection and must be even.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GroupPattern {
    pub family: GroupFamily,
    /// `None` matches any fold.
    pub fold: Option<u32>,
}

impl GroupPattern {
    pub fn matches(&self, group: PointGroup) -> bool {
        group.family() == self.family && (self.fold.is_none() || self.fold == group.fold())
    }
}

impl From<PointGroup> for GroupPattern {
    fn from(group: PointGroup) -> Self {
        Self {
            family: group.family(),
            fold: group.fold(),
        }
    }
}

impl FromStr for GroupPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let illegal = || Error::GroupName(s.to_string());
        let polyhedral = |family| {
            Ok(GroupPattern {
                family,
                fold: None,
            })
        };
        match s {
            "T" => return polyhedral(GroupFamily::T),
            "Td" => return polyhedral(GroupFamily::Td),
            "Th" => return polyhedral(GroupFamily::Th),
            "O" => return polyhedral(GroupFamily::O),
            "Oh" => return polyhedral(GroupFamily::Oh),
            "I" => return polyhedral(GroupFamily::I),
            "Ih" => return polyhedral(GroupFamily::Ih),
            _ => {}
        }
        let mut chars = s.chars();
        let axis = chars.next().ok_or_else(illegal)?;
        let rest = chars.as_str();
        let (param, suffix) = if let Some(suffix) = rest.strip_prefix('*') {
            (None, suffix)
        } else {
            let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            if digits == 0 {
                return Err(illegal());
            }
            let k: u32 = rest[..digits].parse().map_err(|_| illegal())?;
            if k == 0 {
                return Err(illegal());
            }
            (Some(k), &rest[digits..])
        };
        let family = match (axis, suffix) {
            ('C', "") => GroupFamily::Cn,
            ('C', "h") => GroupFamily::Cnh,
            ('C', "v") => GroupFamily::Cnv,
            ('S', "") => GroupFamily::S2n,
            ('D', "") => GroupFamily::Dn,
            ('D', "h") => GroupFamily::Dnh,
            ('D', "d") => GroupFamily::Dnd,
            _ => return Err(illegal()),
        };
        let fold = match (family, param) {
            (GroupFamily::S2n, Some(k)) if k % 2 == 1 => return Err(illegal()),
            (GroupFamily::S2n, Some(k)) => Some(k / 2),
            (_, k) => k,
        };
        Ok(GroupPattern { family, fold })
    }
}

impl FromStr for PointGroup {
    type Err = Error;

    /// Parse a concrete group name (no `*`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern: GroupPattern = s.parse()?;
        match (pattern.family.is_axial(), pattern.fold) {
            (true, None) => Err(Error::GroupName(s.to_string())),
            (_, fold) => Ok(pattern.family.with_fold(fold.unwrap_or(0))),
        }
    }
}

impl fmt::Display for GroupPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fold {
            Some(n) => write!(f, "{}", self.family.with_fold(n)),
            None if !self.family.is_axial() => write!(f, "{}", self.family.with_fold(0)),
            None => {
                let (axis, suffix) = match self.family {
                    GroupFamily::Cn => ("C", ""),
                    GroupFamily::Cnh => ("C", "h"),
                    GroupFamily::Cnv => ("C", "v"),
                    GroupFamily::S2n => ("S", ""),
                    GroupFamily::Dn => ("D", ""),
                    GroupFamily::Dnh => ("D", "h"),
                    _ => ("D", "d"),
                };
                write!(f, "{axis}*{suffix}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_render_like_the_usual_notation() {
        assert_eq!(PointGroup::Cn(1).to_string(), "C1");
        assert_eq!(PointGroup::Cnh(1).to_string(), "C1h");
        assert_eq!(PointGroup::Cnv(4).to_string(), "C4v");
        assert_eq!(PointGroup::S2n(3).to_string(), "S6");
        assert_eq!(PointGroup::Dnd(5).to_string(), "D5d");
        assert_eq!(PointGroup::Th.to_string(), "Th");
        assert_eq!(PointGroup::Ih.to_string(), "Ih");
    }

    #[test]
    fn parse_concrete_groups() {
        assert_eq!("D5h".parse::<PointGroup>().unwrap(), PointGroup::Dnh(5));
        assert_eq!("S6".parse::<PointGroup>().unwrap(), PointGroup::S2n(3));
        assert_eq!("C12".parse::<PointGroup>().unwrap(), PointGroup::Cn(12));
        assert_eq!("Td".parse::<PointGroup>().unwrap(), PointGroup::Td);
        assert!("C*v".parse::<PointGroup>().is_err());
    }

    #[test]
    fn parse_rejects_illegal_names() {
        for bad in ["", "X", "C", "C0", "S3", "Tx", "Ohh", "D2x", "Cv", "c2"] {
            assert!(bad.parse::<GroupPattern>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn wildcard_patterns_match_any_fold() {
        let p: GroupPattern = "C*v".parse().unwrap();
        assert!(p.matches(PointGroup::Cnv(2)));
        assert!(p.matches(PointGroup::Cnv(7)));
        assert!(!p.matches(PointGroup::Cnh(7)));
        assert_eq!(p.to_string(), "C*v");
        let s: GroupPattern = "S4".parse().unwrap();
        assert!(s.matches(PointGroup::S2n(2)));
        assert!(!s.matches(PointGroup::S2n(3)));
        let t: GroupPattern = "T".parse().unwrap();
        assert!(t.matches(PointGroup::T));
        assert!(!t.matches(PointGroup::Td));
    }

    #[test]
    fn order_and_chirality() {
        assert_eq!(PointGroup::Dnd(4).order(), 16);
        assert_eq!(PointGroup::S2n(3).order(), 6);
        assert!(PointGroup::Dn(3).is_chiral());
        assert!(!PointGroup::Cnh(1).is_chiral());
    }
}
