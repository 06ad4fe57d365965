//! 同音異字グループの要素となる単語

use std::cmp::Ordering;
use std::fmt;

/// 表層形と品詞の組
///
/// 同じ読みを持つ単語の集合に格納されます。等価性は両方のフィールドで判定し、
/// 順序は表層形を第一キー、品詞を第二キーとします。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word {
    surface: String,
    pos: String,
}

impl Word {
    /// 新しい単語を作成します。
    ///
    /// # 引数
    ///
    /// * `surface` - 表層形
    /// * `pos` - 品詞（大分類）
    pub fn new<S, P>(surface: S, pos: P) -> Self
    where
        S: Into<String>,
        P: Into<String>,
    {
        Self {
            surface: surface.into(),
            pos: pos.into(),
        }
    }

    /// 表層形を取得します。
    #[inline(always)]
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// 品詞を取得します。
    #[inline(always)]
    pub fn pos(&self) -> &str {
        &self.pos
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.surface
            .cmp(&other.surface)
            .then_with(|| self.pos.cmp(&other.pos))
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.surface, self.pos)
    }
}
