use crate::{
    config::PipelineConfig,
    models::{TransactionGroup, TransactionType},
    utils::is_equal_case_insensitive,
};

/// Hide-tokens predicate: drop token-method groups, but keep swaps that
/// touch the native currency on either side.
fn keeps_under_hide_tokens(group: &TransactionGroup, native_symbol: &str) -> bool {
    let initial = &group.initial_transaction;
    if initial.kind.is_token_category() {
        return false;
    }
    if initial.kind == TransactionType::Swap {
        return initial.destination_token_symbol.as_deref() == Some(native_symbol)
            || initial.source_token_symbol.as_deref() == Some(native_symbol);
    }
    true
}

/// Single-token predicate. On a token page only transactions involving that
/// token are relevant: transfers/approvals are sent to the token contract
/// itself, swaps are sent to the chain's swap router and carry the token
/// address inside the call data.
///
/// The recipient compare against the token address is case-insensitive;
/// the router compare is exact and the data match is sans the `0x` prefix,
/// both deliberately so.
fn involves_token(
    group: &TransactionGroup,
    token_address: &str,
    swaps_contract: Option<&str>,
) -> bool {
    let params = &group.initial_transaction.tx_params;
    let Some(to) = params.to.as_deref() else {
        return false;
    };

    if is_equal_case_insensitive(to, token_address) {
        return true;
    }

    if swaps_contract == Some(to) {
        let needle = token_address.strip_prefix("0x").unwrap_or(token_address);
        if let Some(data) = params.data.as_deref() {
            return data.contains(needle);
        }
    }

    false
}

/// Filter a nonce-ordered sequence of transaction groups by view context.
///
/// Modes, in precedence order: hide-tokens wins over the single-token
/// address filter, which wins over identity. Never reorders.
pub fn filter_transaction_groups<'a>(
    groups: &'a [TransactionGroup],
    hide_token_transactions: bool,
    token_address: Option<&str>,
    chain_id: &str,
    config: &PipelineConfig,
) -> Vec<&'a TransactionGroup> {
    if hide_token_transactions {
        return groups
            .iter()
            .filter(|group| keeps_under_hide_tokens(group, &config.native_currency_symbol))
            .collect();
    }

    if let Some(token_address) = token_address {
        let swaps_contract = config.swaps_contract_for_chain(chain_id);
        return groups
            .iter()
            .filter(|group| involves_token(group, token_address, swaps_contract))
            .collect();
    }

    groups.iter().collect()
}

/// Incremental reveal over the completed-transactions sequence.
///
/// The limit starts at one page increment and only grows; pending groups
/// are never run through this.
#[derive(Debug, Clone)]
pub struct TransactionListPager {
    limit: usize,
    page_increment: usize,
}

impl TransactionListPager {
    pub fn new(page_increment: usize) -> Self {
        Self {
            limit: page_increment,
            page_increment,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// One "view more" action: reveal another page.
    pub fn view_more(&mut self) {
        self.limit += self.page_increment;
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.limit = self.page_increment;
    }

    /// The currently revealed prefix.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..items.len().min(self.limit)]
    }

    pub fn has_more(&self, total: usize) -> bool {
        total > self.limit
    }
}

/// One assembled history view: every filtered pending group, the revealed
/// prefix of the filtered completed groups, and whether more can be shown.
#[derive(Debug)]
pub struct TransactionListView<'a> {
    pub pending: Vec<&'a TransactionGroup>,
    pub completed: Vec<&'a TransactionGroup>,
    pub has_more: bool,
}

/// Filter both sequences with the same context and page the completed one.
pub fn build_transaction_list<'a>(
    pending: &'a [TransactionGroup],
    completed: &'a [TransactionGroup],
    pager: &TransactionListPager,
    hide_token_transactions: bool,
    token_address: Option<&str>,
    chain_id: &str,
    config: &PipelineConfig,
) -> TransactionListView<'a> {
    let pending =
        filter_transaction_groups(pending, hide_token_transactions, token_address, chain_id, config);
    let completed_filtered =
        filter_transaction_groups(completed, hide_token_transactions, token_address, chain_id, config);

    let has_more = pager.has_more(completed_filtered.len());
    let completed = pager.visible(&completed_filtered).to_vec();

    TransactionListView {
        pending,
        completed,
        has_more,
    }
}
