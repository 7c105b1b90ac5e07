pub mod json_api;

pub use json_api::{
    apply_commands_json, summarize_game_json, ApplyCommandsRequest, ApplyCommandsResponse,
    BattingRow, ScoresheetResponse, SummarizeRequest, TeamBatting,
};
