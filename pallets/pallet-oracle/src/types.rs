//! Plain data types shared by the ballot engine, claim tracker and historic
//! store. None of these carry any pallet storage machinery themselves —
//! they are the vocabulary the pallet's storage items and call arguments
//! are built from.

use crate::decimal::Decimal;
use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{traits::Get, BoundedVec, RuntimeDebug};
use scale_info::TypeInfo;
use sp_std::vec::Vec;

/// Upper bound on a ticker symbol's byte length (e.g. `"BTC"`, `"ATOM"`).
pub type SymbolLen = frame_support::traits::ConstU32<12>;

/// Upper bound on a `base`+`quote` concatenated pair key's byte length.
/// Kept as its own bound rather than reusing `SymbolLen` so two
/// maximum-length symbols concatenated can never be silently truncated
/// into a shorter, colliding key.
pub type PairKeyLen = frame_support::traits::ConstU32<24>;

/// An upper-case ASCII ticker, compared and ordered byte-wise so ballots and
/// historic series can be produced in a single deterministic sort.
///
/// Backed by `PairKeyLen` rather than `SymbolLen` so a `CurrencyPair::key()`
/// (up to two concatenated symbols) fits without truncation; a bare ticker
/// parsed via `from_str` is additionally checked against `SymbolLen` so the
/// accept list still only ever holds individually-short symbols.
#[derive(Clone, Encode, Decode, MaxEncodedLen, TypeInfo, PartialEq, Eq, PartialOrd, Ord, RuntimeDebug)]
pub struct Symbol(BoundedVec<u8, PairKeyLen>);

impl Symbol {
    pub fn from_str(s: &str) -> Result<Self, ()> {
        if s.is_empty()
            || s.len() > SymbolLen::get() as usize
            || !s.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(());
        }
        let upper: Vec<u8> = s.bytes().map(|b| b.to_ascii_uppercase()).collect();
        BoundedVec::try_from(upper).map(Symbol).map_err(|_| ())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

/// A `base`/`quote` pair from the governance-controlled accept list, e.g.
/// `BTC` priced against `USD`. The ballot, vote and historic-store keys are
/// all `CurrencyPair::key()`, a single concatenated symbol — this sidesteps
/// the classic raw-byte-prefix-scan collision entirely, since each pair maps
/// to one fully independent storage key rather than a shared byte prefix.
#[derive(Clone, Encode, Decode, MaxEncodedLen, TypeInfo, PartialEq, Eq, RuntimeDebug)]
pub struct CurrencyPair {
    pub base: Symbol,
    pub quote: Symbol,
}

impl CurrencyPair {
    /// The denom key ballots, votes and the historic store all index by.
    pub fn key(&self) -> Symbol {
        let mut bytes = Vec::with_capacity(self.base.as_bytes().len() + self.quote.as_bytes().len());
        bytes.extend_from_slice(self.base.as_bytes());
        bytes.extend_from_slice(self.quote.as_bytes());
        // `base` and `quote` are each bounded by `SymbolLen`; `Symbol`'s
        // backing `PairKeyLen` is large enough for two concatenated, so
        // this never truncates.
        Symbol(BoundedVec::truncate_from(bytes))
    }
}

/// A single validator's submitted exchange rate for one denom, already
/// annotated with the validator's voting power at submission time.
#[derive(Clone, Encode, Decode, TypeInfo, RuntimeDebug)]
pub struct ExchangeRateVote<AccountId> {
    pub denom: Symbol,
    pub rate: Decimal,
    pub voter: AccountId,
    pub power: u64,
}

/// A denom's full set of votes for the period, about to be tallied.
pub type Ballot<AccountId> = Vec<ExchangeRateVote<AccountId>>;

/// Per-validator bookkeeping accumulated while tallying every denom's
/// ballot in a single end-of-period pass.
#[derive(Clone, Default, Encode, Decode, TypeInfo, RuntimeDebug)]
pub struct Claim<AccountId> {
    pub validator: AccountId,
    pub power: u64,
    pub weight: u64,
    pub denoms_voted: u32,
}

impl<AccountId> Claim<AccountId> {
    pub fn new(validator: AccountId, power: u64) -> Self {
        Claim { validator, power, weight: 0, denoms_voted: 0 }
    }
}

/// One stamped sample in a historic price or median series.
#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, RuntimeDebug, PartialEq, Eq)]
pub struct HistoricSample<BlockNumber> {
    pub block: BlockNumber,
    pub value: Decimal,
}

/// Governance-controlled oracle parameters. Distributed into on-chain
/// storage by a root-gated call standing in for a real governance pallet's
/// proposal execution — see this crate's design notes for why the full
/// proposal/voting pipeline itself is out of scope.
#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, RuntimeDebug, PartialEq, Eq)]
pub struct OracleParams {
    /// Blocks between two successive ballot tallies.
    pub vote_period: u64,
    /// Blocks between two successive historic price stamps.
    pub historic_stamp_period: u64,
    /// Blocks between two successive historic median stamps.
    pub median_stamp_period: u64,
    /// Blocks between two successive slash-and-reset passes.
    pub slash_window: u64,
    /// Number of stamps kept per denom before pruning the oldest.
    pub maximum_price_stamps: u32,
    pub maximum_median_stamps: u32,
    /// Half-width, as a fraction of the median, of the reward band.
    pub reward_band: Decimal,
    /// Blocks over which ballot-winner rewards are amortised.
    pub reward_distribution_window: u64,
    /// Fraction of a slash window's votes a validator must hit to avoid a
    /// miss, and (doubling as the ballot quorum ratio) the minimum share of
    /// total bonded power a denom's ballot must carry to avoid being
    /// dropped for the period.
    pub min_valid_per_window: Decimal,
    /// Gates historic price/median stamping and pruning, mirroring the
    /// upstream module's `experimental` EndBlocker flag. When `false` the
    /// vote-tally/slashing machinery still runs; only the historic store is
    /// skipped.
    pub historic_enabled: bool,
}

impl Default for OracleParams {
    fn default() -> Self {
        OracleParams {
            vote_period: 5,
            historic_stamp_period: 5,
            median_stamp_period: 15,
            slash_window: 100,
            maximum_price_stamps: 24,
            maximum_median_stamps: 24,
            reward_band: Decimal::from_raw(2 * crate::decimal::SCALE / 100), // 2%
            reward_distribution_window: 100,
            min_valid_per_window: Decimal::from_raw(5 * crate::decimal::SCALE / 100), // 5%
            historic_enabled: true,
        }
    }
}

/// The read-only statistics bundle returned by the `Aggregates` query (§6):
/// median, mean, max and min over a denom's newest `n` historic medians.
#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, RuntimeDebug, PartialEq, Eq)]
pub struct Aggregates {
    pub median: Decimal,
    pub mean: Decimal,
    pub max: Decimal,
    pub min: Decimal,
}
