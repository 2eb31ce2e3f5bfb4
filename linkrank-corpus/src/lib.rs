pub mod collection;
pub mod error;
pub mod inverted_index;
pub mod rank_list;
pub mod result;

pub use collection::{COLLECTION_FILE, load_collection, parse_page, read_collection_names};
pub use error::CorpusError;
pub use inverted_index::{INVERTED_INDEX_FILE, InvertedIndex, read_inverted_index};
pub use rank_list::{RANK_LIST_FILE, parse_rank_list, read_rank_list, read_url_ranking};
pub use result::{PageRecord, RankListEntry};
