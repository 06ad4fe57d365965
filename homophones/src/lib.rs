//! # homophones
//!
//! テキストコーパスから同音異字（読みが同じで表記が異なる語）を抽出するライブラリです。
//!
//! ## 概要
//!
//! 入力ディレクトリ以下のすべてのファイルを1行ずつ形態素解析し、
//! 各トークンの読みをひらがなに正規化してから表記ごとにまとめます。
//! 異なる表記が2つ以上ある読みだけを同音異字として残し、
//! 品詞で絞り込んだ結果をTSVファイルに書き出します。
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use homophones::{write_homophones, FeatureLayout, HomophoneExtractor, PosFilter, VibratoAnalyzer};
//! use vibrato_rkyv::{Dictionary, SystemDictionaryBuilder, Tokenizer};
//!
//! let lexicon_csv = "橋,0,0,1,名詞,一般,*,*,*,*,橋,ハシ,ハシ
//! 箸,0,0,1,名詞,一般,*,*,*,*,箸,ハシ,ハシ
//! と,0,0,1,助詞,並立助詞,*,*,*,*,と,ト,ト";
//! let dict = SystemDictionaryBuilder::from_readers(
//!     lexicon_csv.as_bytes(),
//!     "1 1\n0 0 0".as_bytes(),
//!     "DEFAULT 0 1 0".as_bytes(),
//!     "DEFAULT,0,0,100,*".as_bytes(),
//! )?;
//! let tokenizer = Tokenizer::new(Dictionary::from_inner(dict));
//!
//! let analyzer = VibratoAnalyzer::new(&tokenizer, FeatureLayout::IPADIC);
//! let mut extractor = HomophoneExtractor::new(analyzer);
//! extractor.add_line("橋と箸");
//! let homophones = extractor.finish();
//!
//! let mut out = vec![];
//! write_homophones(&homophones, &mut out, PosFilter::All)?;
//! assert_eq!(String::from_utf8(out)?, "はし\t橋 箸\n");
//! # Ok(())
//! # }
//! ```

/// 形態素解析器とのインターフェース
pub mod analyzer;

/// コーパスの走査と読み込み
pub mod corpus;

/// エラー型の定義
pub mod errors;

/// 同音異字の集計
pub mod extractor;

/// 仮名と文字種のユーティリティ
pub mod kana;

/// 同音異字グループの要素
pub mod word;

/// TSV出力
pub mod writer;


// Re-exports
pub use analyzer::{Analyzer, FeatureLayout, Morpheme, VibratoAnalyzer};
pub use errors::{HomophoneError, Result};
pub use extractor::{extract_homophones, ExtractStats, HomophoneExtractor, Homophones};
pub use word::Word;
pub use writer::{save_all, save_homophones, write_homophones, PosFilter};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
