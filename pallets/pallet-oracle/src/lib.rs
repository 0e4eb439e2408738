#![cfg_attr(not(feature = "std"), no_std)]

//! Stake-weighted validator exchange-rate oracle: ballots are tallied into
//! a weighted median every vote period, chronic non-voters are slashed and
//! jailed, and the median (plus a short history of prices and medians) is
//! kept on chain for other pallets to read.
//!
//! The end-of-period driver in [`Pallet::on_finalize`] follows, statement
//! for statement, the upstream `EndBlocker` this module was distilled from:
//! clear the published rates, tally every denom's ballot, increment miss
//! counters for validators who didn't clear every denom, distribute
//! rewards, clear the pending votes, then — on their own independent
//! schedules — slash chronic misses and prune old historic samples.

pub mod ballot;
pub mod decimal;
pub mod historic;
pub mod host;
pub mod migrations;
pub mod period;
pub mod types;

#[cfg(test)]
mod mock;

pub use decimal::Decimal;
pub use host::{OracleHost, OracleMissOffence};
pub use pallet::*;
pub use types::{CurrencyPair, OracleParams, Symbol};

#[frame_support::pallet]
pub mod pallet {
    use super::{ballot, historic, migrations, period};
    use crate::decimal::{self, Decimal};
    use crate::host::OracleHost;
    use crate::types::{Claim, CurrencyPair, ExchangeRateVote, HistoricSample, OracleParams, Symbol};
    use frame_support::pallet_prelude::*;
    use frame_system::pallet_prelude::*;
    use sp_runtime::traits::SaturatedConversion;
    use sp_runtime::Perbill;
    use sp_std::collections::btree_map::BTreeMap;
    use sp_std::vec::Vec;

    const LOG_TARGET: &str = "runtime::oracle";

    /// The current storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Because this pallet emits events, it depends on the runtime's definition of an event.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The single capability record bundling every non-FRAME-native
        /// thing this pallet needs from its host chain: bonded validator
        /// power, slashing/jailing, reward distribution and governance
        /// parameters.
        type Host: OracleHost<Self::AccountId, BlockNumberFor<Self>>;

        /// Hard ceiling on the accept list's length, and on how many
        /// (denom, rate) pairs a single vote submission may carry.
        #[pallet::constant]
        type MaxAcceptListLen: Get<u32>;

        /// Hard ceiling on how many historic price stamps are kept per denom.
        #[pallet::constant]
        type MaxPriceStamps: Get<u32>;

        /// Hard ceiling on how many historic median stamps are kept per denom.
        #[pallet::constant]
        type MaxMedianStamps: Get<u32>;
    }

    /// Governance-controlled parameters. Settable only by `set_params` /
    /// `set_accept_list`, which stand in for a real governance pallet's
    /// proposal execution landing its result into storage.
    #[pallet::storage]
    #[pallet::getter(fn params)]
    pub type Params<T> = StorageValue<_, OracleParams, ValueQuery>;

    /// The denoms currently accepting votes.
    #[pallet::storage]
    #[pallet::getter(fn accept_list)]
    pub type AcceptList<T: Config> = StorageValue<_, BoundedVec<CurrencyPair, T::MaxAcceptListLen>, ValueQuery>;

    /// The last published weighted-median exchange rate per denom.
    #[pallet::storage]
    #[pallet::getter(fn exchange_rate)]
    pub type ExchangeRates<T: Config> = StorageMap<_, Blake2_128Concat, Symbol, Decimal, OptionQuery>;

    /// Each voter's most recently submitted vote for the current period,
    /// overwritten on resubmission and cleared in full at every period
    /// boundary.
    #[pallet::storage]
    pub type PendingVotes<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        BoundedVec<(Symbol, Decimal), T::MaxAcceptListLen>,
        OptionQuery,
    >;

    /// Consecutive-window miss counters, reset at every slash window boundary.
    #[pallet::storage]
    #[pallet::getter(fn miss_counter)]
    pub type MissCounters<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u32, ValueQuery>;

    /// Block-ordered, bounded history of raw published rates per denom.
    /// Keying by `Symbol` gives each denom a fully independent storage key,
    /// so similar-prefix denoms (`"USD"` vs `"USDT"`) cannot collide the way
    /// a raw concatenated-key byte scan could.
    #[pallet::storage]
    pub type HistoricPrices<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        Symbol,
        BoundedVec<HistoricSample<BlockNumberFor<T>>, T::MaxPriceStamps>,
        ValueQuery,
    >;

    /// Block-ordered, bounded history of stamped medians per denom.
    #[pallet::storage]
    pub type HistoricMedians<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        Symbol,
        BoundedVec<HistoricSample<BlockNumberFor<T>>, T::MaxMedianStamps>,
        ValueQuery,
    >;

    /// Mean absolute deviation stamped alongside each entry in
    /// `HistoricMedians`, one-to-one: `HistoricMedianDeviations[denom][i]`
    /// is the deviation of the window that produced `HistoricMedians[denom][i]`.
    #[pallet::storage]
    pub type HistoricMedianDeviations<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        Symbol,
        BoundedVec<HistoricSample<BlockNumberFor<T>>, T::MaxMedianStamps>,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A denom's weighted-median exchange rate was published this period.
        RateUpdated { denom: Symbol, rate: Decimal, block: BlockNumberFor<T> },
        /// A denom's ballot was dropped for the period (empty or below quorum).
        BallotDropped { denom: Symbol },
        /// A validator's miss counter advanced for failing to vote on every
        /// accept-listed denom this period.
        MissCountIncremented { validator: T::AccountId, count: u32 },
        /// A validator was slashed and jailed for chronic misses at a slash
        /// window boundary.
        Slashed { validator: T::AccountId, fraction: Perbill },
        /// The governance parameters changed.
        ParamsUpdated,
        /// The accept list changed.
        AcceptListUpdated,
    }

    #[pallet::error]
    pub enum Error<T> {
        /// A submitted rate literal failed to parse.
        ParseError,
        /// A `Decimal` operation would have overflowed its representable range.
        Overflow,
        /// A ballot had no votes to tally.
        EmptyBallot,
        /// A ballot's participating power fell below quorum.
        QuorumNotMet,
        /// A vote referenced a denom outside the accept list.
        UnknownDenom,
        /// A vote submission referenced denoms outside the accept list.
        DenomsNotAccepted,
        /// The caller is not a currently bonded validator.
        NotBonded,
        /// The accept list is longer than `MaxAcceptListLen` allows.
        AcceptListTooLong,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Submits (or overwrites) the caller's exchange rate votes for the
        /// current period. Rejected wholesale, per spec, if any denom isn't
        /// on the accept list — a partially-honoured vote would silently
        /// change what counts as a "miss" for unrelated denoms.
        #[pallet::call_index(0)]
        #[pallet::weight(T::DbWeight::get().reads_writes(2, 1))]
        pub fn aggregate_exchange_rate_vote(
            origin: OriginFor<T>,
            rates: BoundedVec<(Symbol, Decimal), T::MaxAcceptListLen>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let bonded = T::Host::bonded_validators_by_power();
            ensure!(bonded.iter().any(|(acc, _)| acc == &who), Error::<T>::NotBonded);

            let accepted: Vec<Symbol> = Self::accept_list().iter().map(|pair| pair.key()).collect();
            ensure!(
                rates.iter().all(|(denom, _)| accepted.contains(denom)),
                Error::<T>::DenomsNotAccepted
            );

            PendingVotes::<T>::insert(&who, rates);
            Ok(())
        }

        /// Root-gated landing point for a governance proposal's updated
        /// parameters. Takes effect starting at the next period boundary.
        #[pallet::call_index(1)]
        #[pallet::weight(T::DbWeight::get().writes(1))]
        pub fn set_params(origin: OriginFor<T>, params: OracleParams) -> DispatchResult {
            ensure_root(origin)?;
            Params::<T>::put(params);
            Self::deposit_event(Event::ParamsUpdated);
            Ok(())
        }

        /// Root-gated landing point for a governance proposal's updated
        /// accept list.
        #[pallet::call_index(2)]
        #[pallet::weight(T::DbWeight::get().writes(1))]
        pub fn set_accept_list(origin: OriginFor<T>, accept_list: Vec<CurrencyPair>) -> DispatchResult {
            ensure_root(origin)?;
            let bounded: BoundedVec<CurrencyPair, T::MaxAcceptListLen> =
                accept_list.try_into().map_err(|_| Error::<T>::AcceptListTooLong)?;
            AcceptList::<T>::put(bounded);
            Self::deposit_event(Event::AcceptListUpdated);
            Ok(())
        }
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn on_finalize(now: BlockNumberFor<T>) {
            let params = Self::params();
            let height: u64 = now.saturated_into();

            if period::is_period_last_block(height, params.vote_period) {
                Self::run_vote_period_end(now, &params);
            }

            if period::is_period_last_block(height, params.slash_window) {
                Self::slash_and_reset_miss_counters(&params);
            }

            if params.historic_enabled && period::is_period_last_block(height, params.historic_stamp_period) {
                Self::prune_historic_samples(height, &params);
            }
        }

        fn on_runtime_upgrade() -> Weight {
            migrations::v1::migrate::<T>()
        }
    }

    impl<T: Config> Pallet<T> {
        /// The end-of-vote-period driver: clear published rates, tally
        /// every denom's ballot in denom-sorted order, stamp historic
        /// price/median samples, miss-count non-voters and distribute
        /// rewards, then clear the period's pending votes. Order matches
        /// the upstream `EndBlocker` exactly.
        fn run_vote_period_end(now: BlockNumberFor<T>, params: &OracleParams) {
            let height: u64 = now.saturated_into();
            let bonded = T::Host::bonded_validators_by_power();
            let mut claims: BTreeMap<T::AccountId, Claim<T::AccountId>> = bonded
                .iter()
                .cloned()
                .map(|(acc, power)| (acc.clone(), Claim::new(acc, power)))
                .collect();
            let total_bonded_power: u128 = bonded.iter().map(|(_, power)| *power as u128).sum();

            let accept_list = Self::accept_list();
            let mut vote_target_denoms: Vec<Symbol> = accept_list.iter().map(|pair| pair.key()).collect();
            vote_target_denoms.sort();

            // Clear every previously published rate, not just the denoms
            // still on the accept list: a denom dropped from governance
            // between periods must not leave a stale rate behind.
            let _ = ExchangeRates::<T>::clear(u32::MAX, None);

            let votes = Self::collect_votes(&bonded);
            let by_denom = ballot::organize_ballots(votes);

            for denom in &vote_target_denoms {
                let Some(ballot) = by_denom.get(denom) else {
                    log::debug!(target: LOG_TARGET, "ballot dropped (empty): {:?}", denom);
                    Self::deposit_event(Event::BallotDropped { denom: denom.clone() });
                    continue;
                };
                match ballot::tally(ballot, params.reward_band, total_bonded_power, params.min_valid_per_window) {
                    Ok(outcome) => {
                        ExchangeRates::<T>::insert(denom, outcome.median);
                        Self::deposit_event(Event::RateUpdated {
                            denom: denom.clone(),
                            rate: outcome.median,
                            block: now,
                        });
                        ballot::credit_winners(&mut claims, &outcome.winners);
                        if params.historic_enabled {
                            Self::stamp_historic_price(denom.clone(), now, outcome.median, params);
                            Self::stamp_historic_median(denom.clone(), height, params);
                        }
                    }
                    Err(ballot::TallyError::Overflow) => {
                        log::error!(target: LOG_TARGET, "arithmetic overflow tallying {:?}", denom);
                    }
                    Err(_) => {
                        log::debug!(target: LOG_TARGET, "ballot dropped (quorum): {:?}", denom);
                        Self::deposit_event(Event::BallotDropped { denom: denom.clone() });
                    }
                }
            }

            let mut claim_slice: Vec<Claim<T::AccountId>> = claims.into_values().collect();
            claim_slice.sort_by(|a, b| a.validator.cmp(&b.validator));

            let target_len = vote_target_denoms.len() as u32;
            let mut winners = Vec::with_capacity(claim_slice.len());
            for claim in &claim_slice {
                if claim.denoms_voted == target_len {
                    winners.push((claim.validator.clone(), claim.weight));
                    continue;
                }
                let new_count = MissCounters::<T>::mutate(&claim.validator, |c| {
                    *c = c.saturating_add(1);
                    *c
                });
                log::debug!(target: LOG_TARGET, "miss counter for {:?} now {}", claim.validator, new_count);
                Self::deposit_event(Event::MissCountIncremented {
                    validator: claim.validator.clone(),
                    count: new_count,
                });
            }

            T::Host::reward_distribute(&winners);

            let _ = PendingVotes::<T>::clear(u32::MAX, None);
        }

        /// Materializes every bonded validator's most recently submitted
        /// vote as a flat, denom-sorted list of `ExchangeRateVote`s.
        fn collect_votes(bonded: &[(T::AccountId, u64)]) -> Vec<ExchangeRateVote<T::AccountId>> {
            let mut votes = Vec::new();
            for (voter, power) in bonded {
                if let Some(rates) = PendingVotes::<T>::get(voter) {
                    for (denom, rate) in rates.into_iter() {
                        votes.push(ExchangeRateVote { denom, rate, voter: voter.clone(), power: *power });
                    }
                }
            }
            votes
        }

        fn stamp_historic_price(denom: Symbol, now: BlockNumberFor<T>, rate: Decimal, params: &OracleParams) {
            let height: u64 = now.saturated_into();
            if !period::is_period_last_block(height, params.historic_stamp_period) {
                return;
            }
            HistoricPrices::<T>::mutate(denom, |series| {
                if series.is_full() {
                    series.remove(0);
                }
                let _ = series.try_push(HistoricSample { block: now, value: rate });
            });
        }

        fn stamp_historic_median(denom: Symbol, height: u64, params: &OracleParams) {
            if !period::is_period_last_block(height, params.median_stamp_period) {
                return;
            }
            let prices = HistoricPrices::<T>::get(&denom);
            let cutoff = historic::calc_window_cutoff(height, params.median_stamp_period, params.maximum_price_stamps);
            let values = historic::values_since(prices.as_slice(), cutoff);
            let Ok(median) = historic::median_of(&values) else {
                return;
            };
            let deviation = historic::mean_squared_deviation(&values, median).unwrap_or(Decimal::ZERO);
            let block = BlockNumberFor::<T>::saturated_from(height);
            HistoricMedians::<T>::mutate(denom.clone(), |series| {
                if series.is_full() {
                    series.remove(0);
                }
                let _ = series.try_push(HistoricSample { block, value: median });
            });
            HistoricMedianDeviations::<T>::mutate(denom, |series| {
                if series.is_full() {
                    series.remove(0);
                }
                let _ = series.try_push(HistoricSample { block, value: deviation });
            });
        }

        fn slash_and_reset_miss_counters(params: &OracleParams) {
            // Address-sorted, not the descending-power order
            // `bonded_validators_by_power` returns: slashing/reset order is
            // part of the consensus contract (spec §4.G), independent of
            // how the host happens to order its validator set.
            let mut bonded = T::Host::bonded_validators_by_power();
            bonded.sort_by(|a, b| a.0.cmp(&b.0));

            // miss_ratio = miss_counter / (slash_window / vote_period); a
            // validator is slashed when 1 - miss_ratio < min_valid_per_window,
            // i.e. when its misses exceed what min_valid_per_window tolerates
            // out of the window's total voting opportunities.
            let total_opportunities =
                if params.vote_period == 0 { params.slash_window } else { params.slash_window / params.vote_period };
            let total_opportunities_dec = Decimal::from_raw(total_opportunities as i128 * decimal::SCALE);
            let min_valid_count = total_opportunities_dec
                .checked_mul(params.min_valid_per_window)
                .map(|d| (d.raw() / decimal::SCALE) as u64)
                .unwrap_or(0);
            // A validator clearing exactly `min_valid_count` votes has met
            // the minimum, not fallen below it, so the slash threshold is
            // strict: more misses than the window tolerates, not at least.
            let max_tolerated_misses = total_opportunities.saturating_sub(min_valid_count);
            for (validator, _) in &bonded {
                let misses = MissCounters::<T>::take(validator);
                if misses as u64 > max_tolerated_misses {
                    log::warn!(target: LOG_TARGET, "slashing {:?} for {} misses in window", validator, misses);
                    let fraction = Perbill::from_percent(1);
                    Self::deposit_event(Event::Slashed { validator: validator.clone(), fraction });
                    T::Host::slash_and_jail(validator, 1);
                }
            }
        }

        fn prune_historic_samples(height: u64, params: &OracleParams) {
            let price_cutoff = historic::prune_before(
                height,
                params.historic_stamp_period,
                params.maximum_price_stamps,
                params.vote_period,
            );
            let median_cutoff = historic::prune_before(
                height,
                params.median_stamp_period,
                params.maximum_median_stamps,
                params.vote_period,
            );
            for pair in Self::accept_list().iter() {
                let denom = pair.key();
                HistoricPrices::<T>::mutate(denom.clone(), |series| {
                    series.retain(|s| s.block.saturated_into::<u64>() > price_cutoff);
                });
                HistoricMedians::<T>::mutate(denom.clone(), |series| {
                    series.retain(|s| s.block.saturated_into::<u64>() > median_cutoff);
                });
                HistoricMedianDeviations::<T>::mutate(denom, |series| {
                    series.retain(|s| s.block.saturated_into::<u64>() > median_cutoff);
                });
            }
        }

        /// The denom's newest `n` historic median samples, newest first (§6).
        pub fn historic_medians(denom: &Symbol, n: u32) -> Vec<Decimal> {
            let series = HistoricMedians::<T>::get(denom);
            historic::last_n(series.as_slice(), n)
        }

        /// The mean absolute deviation stamped alongside the denom's most
        /// recent historic median, if any (§6).
        pub fn historic_median_deviation(denom: &Symbol) -> Option<Decimal> {
            HistoricMedianDeviations::<T>::get(denom).last().map(|s| s.value)
        }

        /// Whether `rate` falls within the most recent stamped median's
        /// deviation band for `denom` (§6). `false` if no median has been
        /// stamped yet for this denom.
        pub fn within_historic_median_deviation(denom: &Symbol, rate: Decimal) -> bool {
            let medians = HistoricMedians::<T>::get(denom);
            let Some(latest_median) = medians.last().map(|s| s.value) else {
                return false;
            };
            let Some(deviation) = Self::historic_median_deviation(denom) else {
                return false;
            };
            let (Ok(lower), Ok(upper)) =
                (latest_median.checked_sub(deviation), latest_median.checked_add(deviation))
            else {
                return false;
            };
            rate >= lower && rate <= upper
        }

        /// Median, mean, max and min over the denom's newest `n` historic
        /// medians (§6).
        pub fn aggregates(denom: &Symbol, n: u32) -> Option<crate::types::Aggregates> {
            let values = Self::historic_medians(denom, n);
            Some(crate::types::Aggregates {
                median: historic::median_of(&values).ok()?,
                mean: historic::average_of(&values).ok()?,
                max: historic::max_of(&values).ok()?,
                min: historic::min_of(&values).ok()?,
            })
        }
    }
}
