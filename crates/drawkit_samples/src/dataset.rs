//! Embedded sample data and the optional TOML vocabulary loader.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::spec::{EnumTagsValue, SampleError, SpecRoster, SpecVocabularyEntry};

const TUP_ROSTERS: [(&str, [&str; 20]); 3] = [
    (
        "二一班",
        [
            "张三", "李四", "王五", "赵六", "孙七", "周八", "吴九", "郑十", "陈一", "刘二",
            "杨三", "黄四", "朱五", "林六", "何七", "高八", "徐九", "马十", "梁一", "宋二",
        ],
    ),
    (
        "二二班",
        [
            "王明", "李华", "张伟", "刘强", "陈静", "杨洋", "赵敏", "孙丽", "周杰", "吴磊",
            "郑爽", "冯巩", "卫青", "霍去病", "岳飞", "文天祥", "于谦", "戚继光", "郑成功",
            "林则徐",
        ],
    ),
    (
        "二三班",
        [
            "小明", "小红", "小刚", "小丽", "小华", "小强", "小芳", "小军", "小燕", "小东",
            "小梅", "小龙", "小凤", "小虎", "小兰", "小鹏", "小雪", "小松", "小云", "小峰",
        ],
    ),
];

const TUP_WORDS_COMMON: [&str; 50] = [
    "apple", "banana", "cat", "dog", "elephant", "fish", "grape", "house", "ice", "juice",
    "king", "lion", "monkey", "nurse", "orange", "pig", "queen", "rabbit", "sun", "tiger",
    "umbrella", "violin", "water", "box", "yellow", "zebra", "book", "chair", "desk", "egg",
    "flower", "garden", "hat", "island", "jacket", "kite", "lamp", "moon", "nest", "ocean",
    "pencil", "quilt", "river", "star", "tree", "uniform", "vase", "window", "fox", "zoo",
];

// (word, phonetic, definition, example, tags, image)
type TupVocabularyRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static str,
);

const TUP_VOCABULARY: [TupVocabularyRow; 12] = [
    ("apple", "ˈæpl", "n. 苹果", "I eat an apple every day.", &["水果", "基础词汇"], "images/apple.png"),
    ("banana", "bəˈnɑːnə", "n. 香蕉", "The monkey likes bananas.", &["水果"], "images/banana.png"),
    ("cat", "kæt", "n. 猫", "The cat is sleeping on the sofa.", &["动物", "基础词汇"], "images/cat.png"),
    ("dog", "dɒɡ", "n. 狗", "My dog can run fast.", &["动物", "基础词汇"], "images/dog.png"),
    ("elephant", "ˈelɪfənt", "n. 大象", "An elephant has a long nose.", &["动物"], "images/elephant.png"),
    ("fish", "fɪʃ", "n. 鱼", "Fish live in the water.", &["动物"], ""),
    ("house", "haʊs", "n. 房子", "This is my house.", &["生活"], ""),
    ("juice", "dʒuːs", "n. 果汁", "Would you like some orange juice?", &["食物"], ""),
    ("sun", "sʌn", "n. 太阳", "The sun is hot.", &["自然"], "images/sun.png"),
    ("umbrella", "ʌmˈbrelə", "n. 雨伞", "Take an umbrella with you.", &[], ""),
    ("book", "bʊk", "n. 书", "I read a book before bed.", &["学习用品", "基础词汇"], ""),
    ("pencil", "ˈpensl", "n. 铅笔", "", &["学习用品"], ""),
];

/// Class rosters written by `create_sample_excel`.
pub fn derive_rosters() -> Vec<SpecRoster> {
    TUP_ROSTERS
        .iter()
        .map(|(c_class, l_names)| SpecRoster {
            class_name: c_class.to_string(),
            names: l_names.iter().map(|c_name| c_name.to_string()).collect(),
        })
        .collect()
}

/// Common words written by `create_words_excel`.
pub fn derive_common_words() -> Vec<String> {
    TUP_WORDS_COMMON.iter().map(|c_word| c_word.to_string()).collect()
}

/// Enriched entries written by `create_vocabulary_excel`.
///
/// Empty strings in the embedded rows mean the field is absent.
pub fn derive_vocabulary_entries() -> Vec<SpecVocabularyEntry> {
    fn derive_optional(value: &str) -> Option<String> {
        (!value.is_empty()).then(|| value.to_string())
    }

    TUP_VOCABULARY
        .iter()
        .map(
            |(c_word, c_phonetic, c_definition, c_example, l_tags, c_image)| SpecVocabularyEntry {
                word: c_word.to_string(),
                phonetic: derive_optional(c_phonetic),
                definition: derive_optional(c_definition),
                example: derive_optional(c_example),
                tags: (!l_tags.is_empty()).then(|| {
                    EnumTagsValue::Many(l_tags.iter().map(|c_tag| Some(c_tag.to_string())).collect())
                }),
                image: derive_optional(c_image),
            },
        )
        .collect()
}

/// TOML document holding `[[entries]]` tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecVocabularyDataset {
    #[serde(default)]
    pub entries: Vec<SpecVocabularyEntry>,
}

/// Parse a vocabulary dataset from TOML text.
pub fn parse_vocabulary_dataset(
    content: &str,
    path: &Path,
) -> Result<Vec<SpecVocabularyEntry>, SampleError> {
    let dataset: SpecVocabularyDataset =
        toml::from_str(content).map_err(|err| SampleError::DatasetLoad {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
    Ok(dataset.entries)
}

/// Read and parse a vocabulary dataset file.
pub fn load_vocabulary_dataset(path: &Path) -> Result<Vec<SpecVocabularyEntry>, SampleError> {
    let content = fs::read_to_string(path).map_err(|err| SampleError::DatasetLoad {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let l_entries = parse_vocabulary_dataset(&content, path)?;
    debug!(path = %path.display(), entries = l_entries.len(), "vocabulary dataset loaded");
    Ok(l_entries)
}
