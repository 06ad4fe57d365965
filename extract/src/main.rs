//! コーパスから同音異字を抽出するユーティリティ
//!
//! このバイナリは、入力ディレクトリ以下のすべてのファイルを形態素解析し、
//! 読みが同じで表記が異なる語を品詞ごとのTSVファイルとして出力します。

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use vibrato_rkyv::dictionary::PresetDictionaryKind;
use vibrato_rkyv::errors::VibratoError;
use vibrato_rkyv::{CacheStrategy, Dictionary, Tokenizer};

use homophones::corpus::collect_files;
use homophones::{save_all, FeatureLayout, HomophoneError, HomophoneExtractor, VibratoAnalyzer};

/// ダウンロード可能なプリセット辞書
#[derive(Clone, Copy, Debug)]
enum Preset {
    Ipadic,
    UnidicCwj,
    UnidicCsj,
}

impl Preset {
    fn kind(self) -> PresetDictionaryKind {
        match self {
            Self::Ipadic => PresetDictionaryKind::Ipadic,
            Self::UnidicCwj => PresetDictionaryKind::UnidicCwj,
            Self::UnidicCsj => PresetDictionaryKind::UnidicCsj,
        }
    }

    fn layout(self) -> FeatureLayout {
        match self {
            Self::Ipadic => FeatureLayout::IPADIC,
            Self::UnidicCwj | Self::UnidicCsj => FeatureLayout::UNIDIC,
        }
    }
}

/// `Preset` の `FromStr` 実装
impl FromStr for Preset {
    type Err = &'static str;

    fn from_str(preset: &str) -> Result<Self, Self::Err> {
        match preset {
            "ipadic" => Ok(Self::Ipadic),
            "unidic-cwj" => Ok(Self::UnidicCwj),
            "unidic-csj" => Ok(Self::UnidicCsj),
            _ => Err("Could not parse a preset"),
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "extract", about = "Extracts homophones from a text corpus", version)]
struct Args {
    /// Directory of the corpus (e.g., the output of WikiExtractor).
    #[clap(short = 'i', long, env = "HOMOPHONES_INPUT_DIR", default_value = "text")]
    input_dir: PathBuf,

    /// Directory to which the homophone lists are output.
    #[clap(short = 'o', long, env = "HOMOPHONES_OUTPUT_DIR", default_value = "homophones")]
    output_dir: PathBuf,

    /// System dictionary (in zstd).
    #[clap(short = 'd', long, env = "HOMOPHONES_SYSDIC", conflicts_with = "preset")]
    sysdic: Option<PathBuf>,

    /// Preset dictionary downloaded to the user cache directory.
    /// Choices are ipadic, unidic-cwj, and unidic-csj.
    #[clap(short = 'p', long)]
    preset: Option<Preset>,

    /// Feature format of the system dictionary. Choices are ipadic and unidic.
    #[clap(short = 'F', long, default_value = "ipadic")]
    dict_format: FeatureLayout,

    /// Ignores white spaces in input strings.
    #[clap(short = 'S', long)]
    ignore_space: bool,

    /// Maximum length of unknown words.
    #[clap(short = 'M', long)]
    max_grouping_len: Option<usize>,

    /// Prints debug logs.
    #[clap(short = 'v', long)]
    verbose: bool,
}

/// 抽出の実行中に発生する可能性のあるエラー
#[derive(Debug, Error)]
enum ExtractError {
    /// 辞書が指定されていない
    #[error("Either --sysdic or --preset must be specified.")]
    MissingDictionary,

    /// 辞書の読み込みやトークナイザーの設定のエラー
    #[error("Dictionary loading failed: {0}")]
    Vibrato(#[from] VibratoError),

    /// 抽出や保存のエラー
    #[error(transparent)]
    Homophone(#[from] HomophoneError),

    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// 辞書を読み込み、素性のレイアウトとともに返す
fn load_dictionary(args: &Args) -> Result<(Dictionary, FeatureLayout), ExtractError> {
    if let Some(sysdic) = &args.sysdic {
        tracing::info!(path = %sysdic.display(), "Loading the dictionary...");
        let dict = Dictionary::from_zstd(sysdic, CacheStrategy::GlobalCache)?;
        Ok((dict, args.dict_format))
    } else if let Some(preset) = args.preset {
        let kind = preset.kind();
        let dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from(".cache"))
            .join("vibrato-rkyv-assets")
            .join(kind.name());
        fs::create_dir_all(&dir)?;
        tracing::info!(
            preset = kind.name(),
            dir = %dir.display(),
            "Loading the preset dictionary. This may take a moment on the first run..."
        );
        let dict = Dictionary::from_preset_with_download(kind, dir)?;
        Ok((dict, preset.layout()))
    } else {
        Err(ExtractError::MissingDictionary)
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}, ETA: {eta})")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}

/// メイン関数
///
/// 辞書をロードしてコーパス全体から同音異字を抽出し、
/// 絞り込みなし・名詞・動詞・形容詞・副詞の5つのファイルに保存します。
fn main() -> Result<(), ExtractError> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    fs::create_dir_all(&args.output_dir)?;

    let (dict, layout) = load_dictionary(&args)?;
    let tokenizer = Tokenizer::new(dict)
        .ignore_space(args.ignore_space)?
        .max_grouping_len(args.max_grouping_len.unwrap_or(0));
    let analyzer = VibratoAnalyzer::new(&tokenizer, layout);

    tracing::info!(input_dir = %args.input_dir.display(), "Start extracting homophones ...");
    let files = collect_files(&args.input_dir)?;
    let mut extractor = HomophoneExtractor::new(analyzer);
    let pb = progress_bar(files.len());
    for path in pb.wrap_iter(files.iter()) {
        extractor.add_file(path)?;
    }
    pb.finish_and_clear();

    let stats = extractor.stats();
    let homophones = extractor.finish();
    tracing::info!(
        files = stats.num_files,
        lines = stats.num_lines,
        tokens = stats.num_accepted,
        "Finish extracting: found {} unique kana.",
        homophones.len()
    );

    save_all(&homophones, &args.output_dir)?;

    Ok(())
}
