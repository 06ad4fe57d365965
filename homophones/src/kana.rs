//! 仮名と文字種のユーティリティ
//!
//! 読み仮名の正規化（カタカナからひらがなへの変換）と、
//! 同音異字から除外するラテン文字の判定を提供します。

use std::sync::LazyLock;

use regex::Regex;

static LATIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Script=Latin}").unwrap());

/// カタカナとひらがなのコードポイントの差
const KANA_OFFSET: u32 = 0x60;

/// 対応するひらがなを持つカタカナかどうかを判定します。
///
/// ァ(U+30A1)からヶ(U+30F6)までと、踊り字のヽ(U+30FD)・ヾ(U+30FE)が対象です。
/// 長音符`ー`や中黒`・`は含みません。
#[inline(always)]
pub const fn is_convertible_katakana(c: char) -> bool {
    matches!(c, '\u{30A1}'..='\u{30F6}' | '\u{30FD}'..='\u{30FE}')
}

/// 文字列中のカタカナをひらがなに変換します。
///
/// カタカナ以外の文字はそのまま残ります。変換は冪等です。
///
/// # 引数
///
/// * `text` - 変換対象の文字列
///
/// # 戻り値
///
/// カタカナがひらがなになった文字列
///
/// # 例
///
/// ```
/// use homophones::kana::katakana_to_hiragana;
///
/// assert_eq!(katakana_to_hiragana("ハシ"), "はし");
/// assert_eq!(katakana_to_hiragana("コーヒー豆"), "こーひー豆");
/// ```
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| {
            if is_convertible_katakana(c) {
                // 変換先は常にひらがなブロック内に収まる
                char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// ラテン文字（Unicodeの文字種がLatinの文字）を含むかどうかを判定します。
///
/// ASCIIの英字に加えて、アクセント付き文字や全角英字も対象です。
pub fn contains_latin(text: &str) -> bool {
    LATIN_PATTERN.is_match(text)
}
