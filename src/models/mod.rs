//! Request and response types for the Algolia REST API.

mod batch;
mod index_meta;
mod key;
mod logs;
mod object;
mod rule;
mod search;
mod settings;
mod synonym;
mod task;

pub use batch::{BatchAction, BatchOperation, BatchOperationIndexed, BatchRes, MultipleBatchRes};
pub use index_meta::IndexRes;
pub use key::{AddKeyRes, ApiKey, DeleteRes, KeyParams, UpdateKeyRes};
pub use logs::{LogRes, LogType, LogsParams};
pub use object::{Object, object_id_of};
pub use rule::{
    Anchoring, BatchRulesRes, ClearRulesRes, DeleteRuleRes, HiddenObject, PromotedObject, Rule,
    RuleCondition, RuleConsequence, SaveRuleRes, SearchRulesParams, SearchRulesRes, TimeRange,
};
pub use search::{
    BrowseRes, FacetHit, IndexedQuery, MultipleQueriesStrategy, QueryRes, SearchFacetRes,
    SearchParams,
};
pub use settings::{Distinct, IgnorePlurals, RemoveStopWords, Settings, TypoTolerance};
pub use synonym::{SearchSynonymsRes, Synonym};
pub use task::{CreateObjectRes, DeleteTaskRes, TaskStatusRes, UpdateObjectRes, UpdateTaskRes};

pub(crate) use index_meta::ListIndexesRes;
pub(crate) use key::ListKeysRes;
pub(crate) use search::ParamsBody;
