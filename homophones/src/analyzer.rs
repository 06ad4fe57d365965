//! 形態素解析器とのインターフェース
//!
//! 抽出処理は[`Analyzer`]トレイトを通して解析器を利用します。
//! 本番用の実装は`vibrato-rkyv`のトークナイザーをラップした[`VibratoAnalyzer`]で、
//! トークンの素性文字列から品詞と読みを[`FeatureLayout`]に従って取り出します。

use std::str::FromStr;

use csv_core::ReadFieldResult;
use vibrato_rkyv::tokenizer::worker::Worker;
use vibrato_rkyv::Tokenizer;

use crate::errors::HomophoneError;

/// 読みが存在しないことを表す素性の値
const SENTINEL: &str = "*";

/// 解析結果の1トークン
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Morpheme {
    /// 表層形
    pub surface: String,
    /// 品詞（大分類）
    pub pos: String,
    /// カタカナの読み。記号や未知語などで読みがない場合は`None`
    pub reading: Option<String>,
}

impl Morpheme {
    /// 新しいトークンを作成します。
    pub fn new<S, P>(surface: S, pos: P, reading: Option<&str>) -> Self
    where
        S: Into<String>,
        P: Into<String>,
    {
        Self {
            surface: surface.into(),
            pos: pos.into(),
            reading: reading.map(str::to_string),
        }
    }
}

/// 1行のテキストをトークン列に分割する形態素解析器
pub trait Analyzer {
    /// 1行を解析し、出現順のトークン列を返します。
    fn analyze(&mut self, line: &str) -> Vec<Morpheme>;
}

impl<A: Analyzer + ?Sized> Analyzer for &mut A {
    fn analyze(&mut self, line: &str) -> Vec<Morpheme> {
        (**self).analyze(line)
    }
}

/// 素性文字列のどの列に品詞と読みが入っているかを表します。
///
/// 列番号は素性（表層形と接続ID・コストを除いた部分）の0始まりのインデックスです。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureLayout {
    pos_index: usize,
    reading_index: usize,
}

impl FeatureLayout {
    /// MeCab IPADIC形式（品詞,品詞細分類1,...,原形,読み,発音）
    pub const IPADIC: Self = Self::new(0, 7);

    /// UniDic形式（pos1,...,type,kana,...）
    pub const UNIDIC: Self = Self::new(0, 20);

    /// 任意の列番号でレイアウトを作成します。
    pub const fn new(pos_index: usize, reading_index: usize) -> Self {
        Self {
            pos_index,
            reading_index,
        }
    }

    /// 品詞の列番号
    pub const fn pos_index(&self) -> usize {
        self.pos_index
    }

    /// 読みの列番号
    pub const fn reading_index(&self) -> usize {
        self.reading_index
    }

    /// 表層形と素性文字列から[`Morpheme`]を組み立てます。
    ///
    /// 品詞の列がない場合は`*`、読みの列がないか`*`または空の場合は読みなしとします。
    pub fn morpheme(&self, surface: &str, feature: &str) -> Morpheme {
        let fields = parse_csv_row(feature);
        let pos = fields
            .get(self.pos_index)
            .map_or(SENTINEL, String::as_str);
        let reading = fields
            .get(self.reading_index)
            .map(String::as_str)
            .filter(|r| !r.is_empty() && *r != SENTINEL);
        Morpheme::new(surface, pos, reading)
    }
}

impl Default for FeatureLayout {
    fn default() -> Self {
        Self::IPADIC
    }
}

impl FromStr for FeatureLayout {
    type Err = HomophoneError;

    /// `ipadic`または`unidic`からレイアウトをパースします（大文字小文字は区別しません）。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ipadic" => Ok(Self::IPADIC),
            "unidic" => Ok(Self::UNIDIC),
            _ => Err(HomophoneError::invalid_argument(
                "layout",
                format!("Could not parse a dictionary format: {s}"),
            )),
        }
    }
}

/// CSV行をパースしてフィールドのベクトルに変換する
///
/// 引用符で囲まれたフィールド（カンマを含む表層形など）も扱います。
fn parse_csv_row(row: &str) -> Vec<String> {
    let mut fields = vec![];
    let mut rdr = csv_core::Reader::new();
    let mut bytes = row.as_bytes();
    let mut output = [0; 4096];
    let mut field = vec![];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        field.extend_from_slice(&output[..nout]);
        bytes = &bytes[nin..];
        let end = match result {
            ReadFieldResult::InputEmpty | ReadFieldResult::End => true,
            ReadFieldResult::Field { record_end } => record_end,
            ReadFieldResult::OutputFull => continue,
        };
        fields.push(String::from_utf8_lossy(&field).into_owned());
        field.clear();
        if end {
            break;
        }
    }
    fields
}

/// `vibrato-rkyv`のトークナイザーを使う解析器
pub struct VibratoAnalyzer {
    worker: Worker,
    layout: FeatureLayout,
}

impl VibratoAnalyzer {
    /// トークナイザーから解析器を作成します。
    ///
    /// # 引数
    ///
    /// * `tokenizer` - 辞書を読み込み済みのトークナイザー
    /// * `layout` - 辞書の素性のレイアウト
    pub fn new(tokenizer: &Tokenizer, layout: FeatureLayout) -> Self {
        Self {
            worker: tokenizer.new_worker(),
            layout,
        }
    }

    /// 素性のレイアウト
    pub fn layout(&self) -> FeatureLayout {
        self.layout
    }
}

impl Analyzer for VibratoAnalyzer {
    fn analyze(&mut self, line: &str) -> Vec<Morpheme> {
        self.worker.reset_sentence(line);
        self.worker.tokenize();
        self.worker
            .token_iter()
            .map(|t| self.layout.morpheme(t.surface(), t.feature()))
            .collect()
    }
}
