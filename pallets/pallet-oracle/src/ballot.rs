//! The ballot engine (component B) and the tally step of the end-of-period
//! driver (component E, grounded directly in `abci.go`'s `Tally`).
//!
//! Every function here is pure: no storage access, no side effects. The
//! pallet's `on_finalize` is responsible for materializing sorted inputs
//! and for turning the outputs into storage writes and events in a fixed
//! order.

use crate::decimal::Decimal;
use crate::types::{Ballot, Claim, ExchangeRateVote, Symbol};
use sp_std::collections::btree_map::BTreeMap;
use sp_std::vec::Vec;

/// Groups a flat list of votes by denom, each denom's ballot sorted by
/// exchange rate ascending (ties broken by voter) so the median and
/// reward-band filtering below are deterministic regardless of the
/// order votes were submitted in.
pub fn organize_ballots<AccountId: Ord + Clone>(
    votes: Vec<ExchangeRateVote<AccountId>>,
) -> BTreeMap<Symbol, Ballot<AccountId>> {
    let mut by_denom: BTreeMap<Symbol, Ballot<AccountId>> = BTreeMap::new();
    for vote in votes {
        by_denom.entry(vote.denom.clone()).or_default().push(vote);
    }
    for ballot in by_denom.values_mut() {
        ballot.sort_by(|a, b| a.rate.cmp(&b.rate).then_with(|| a.voter.cmp(&b.voter)));
    }
    by_denom
}

/// The stake-weighted median exchange rate of a ballot.
///
/// Abstain entries (non-positive rate) are counted toward the total weight
/// `W` — they still occupy cumulative power as the walk passes over them —
/// but can never themselves be returned as the median: the walk keeps going
/// past an abstain even once cumulative power has cleared `W/2`, matching
/// the data model's "counted for weight purposes but excluded from the
/// median" rule. On ties, the first vote whose cumulative power reaches
/// `W/2` wins outright (lower weighted median, no averaging), per spec.
pub fn weighted_median<AccountId>(ballot: &Ballot<AccountId>) -> Result<Decimal, ()> {
    if ballot.is_empty() {
        return Err(());
    }
    let total_power: u128 = ballot.iter().map(|v| v.power as u128).sum();
    if total_power == 0 {
        return Err(());
    }
    let half = total_power / 2;
    let mut cumulative: u128 = 0;
    let mut candidate: Option<Decimal> = None;
    for vote in ballot.iter() {
        cumulative += vote.power as u128;
        if vote.rate.is_positive() && candidate.is_none() && cumulative >= half {
            candidate = Some(vote.rate);
        }
    }
    candidate.or_else(|| ballot.iter().rev().find(|v| v.rate.is_positive()).map(|v| v.rate)).ok_or(())
}

/// Power-weighted population standard deviation of a ballot's rates around
/// their power-weighted arithmetic mean, computed over positive-rate
/// entries only — abstains contribute to neither the mean nor the variance.
/// Uses `Decimal::sqrt`'s in-`Decimal`-space Newton-Raphson (no separate
/// wide-integer `isqrt` needed).
pub fn standard_deviation<AccountId>(ballot: &Ballot<AccountId>) -> Result<Decimal, ()> {
    let positive: Vec<&crate::types::ExchangeRateVote<AccountId>> =
        ballot.iter().filter(|v| v.rate.is_positive()).collect();
    if positive.is_empty() {
        return Err(());
    }
    let total_power: u128 = positive.iter().map(|v| v.power as u128).sum();
    if total_power == 0 {
        return Err(());
    }
    let total_power_dec = Decimal::from_raw(total_power as i128 * crate::decimal::SCALE);

    let mut weighted_sum = Decimal::ZERO;
    for vote in &positive {
        let weight = Decimal::from_raw(vote.power as i128 * crate::decimal::SCALE);
        weighted_sum = weighted_sum.checked_add(vote.rate.checked_mul(weight)?)?;
    }
    let mean = weighted_sum.checked_div(total_power_dec)?;

    let mut variance_sum = Decimal::ZERO;
    for vote in &positive {
        let diff = vote.rate.checked_sub(mean)?;
        let squared = diff.checked_mul(diff)?;
        let weight = Decimal::from_raw(vote.power as i128 * crate::decimal::SCALE);
        variance_sum = variance_sum.checked_add(squared.checked_mul(weight)?)?;
    }
    let variance = variance_sum.checked_div(total_power_dec)?;
    variance.sqrt()
}

/// Classification outcome of tallying one denom's ballot: the weighted
/// median rate to publish, plus the per-voter power/vote-count deltas to
/// fold into the running claim map.
pub struct TallyOutcome<AccountId> {
    pub median: Decimal,
    pub winners: Vec<(AccountId, u64)>,
}

/// Why a ballot was dropped instead of producing a rate this period. Kept
/// distinct from `Overflow` (see `Error::Overflow` in `lib.rs`): these two
/// are ordinary, expected outcomes logged at `debug`, not invariant
/// violations.
pub enum TallyError {
    EmptyBallot,
    QuorumNotMet,
    Overflow,
}

impl From<()> for TallyError {
    fn from(_: ()) -> Self {
        TallyError::Overflow
    }
}

/// Tallies a single denom's ballot: enforces the per-denom quorum (§4.B
/// "Ballot drop"), then computes the weighted median and credits every
/// voter inside `[median - spread, median + spread]` (plus any non-positive
/// "abstain" vote) with a vote toward their claim, where
/// `spread = max(median * reward_band / 2, standard_deviation)`.
///
/// Mirrors `abci.go`'s `Tally` function, plus the quorum gate its caller
/// (`EndBlocker`) applies via `ClearExchangeRates`/ballot organization.
pub fn tally<AccountId: Clone>(
    ballot: &Ballot<AccountId>,
    reward_band: Decimal,
    total_bonded_power: u128,
    min_valid_per_window: Decimal,
) -> Result<TallyOutcome<AccountId>, TallyError> {
    if ballot.is_empty() {
        return Err(TallyError::EmptyBallot);
    }

    let participating_power: u128 = ballot.iter().map(|v| v.power as u128).sum();
    let total_bonded_dec = Decimal::from_raw(total_bonded_power as i128 * crate::decimal::SCALE);
    let participating_dec = Decimal::from_raw(participating_power as i128 * crate::decimal::SCALE);
    let min_required = total_bonded_dec.checked_mul(min_valid_per_window)?;
    if participating_dec < min_required {
        return Err(TallyError::QuorumNotMet);
    }

    let median = weighted_median(ballot).map_err(|_| TallyError::EmptyBallot)?;
    let std_dev = standard_deviation(ballot).map_err(|_| TallyError::EmptyBallot)?;

    let half_band = reward_band.quo_int(2)?;
    let band_spread = median.checked_mul(half_band)?;
    let spread = Decimal::max(band_spread, std_dev);

    let lower = median.checked_sub(spread)?;
    let upper = median.checked_add(spread)?;

    let mut winners = Vec::with_capacity(ballot.len());
    for vote in ballot {
        let in_band = vote.rate >= lower && vote.rate <= upper;
        if in_band || !vote.rate.is_positive() {
            winners.push((vote.voter.clone(), vote.power));
        }
    }

    Ok(TallyOutcome { median, winners })
}

/// Folds a ballot's winners into the running per-validator claim map.
pub fn credit_winners<AccountId: Ord + Clone>(
    claims: &mut BTreeMap<AccountId, Claim<AccountId>>,
    winners: &[(AccountId, u64)],
) {
    for (voter, power) in winners {
        let claim = claims
            .entry(voter.clone())
            .or_insert_with(|| Claim::new(voter.clone(), 0));
        claim.weight = claim.weight.saturating_add(*power);
        claim.denoms_voted = claim.denoms_voted.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn vote(rate: &str, voter: u64, power: u64) -> ExchangeRateVote<u64> {
        ExchangeRateVote { denom: Symbol::from_str("BTC").unwrap(), rate: d(rate), voter, power }
    }

    // Spec §8 scenario 4: W = 4, cumulative reaches half (2) at the second vote.
    fn scenario_four() -> Ballot<u64> {
        sp_std::vec![vote("10", 1, 1), vote("20", 2, 2), vote("30", 3, 1)]
    }

    #[test]
    fn weighted_median_matches_scenario_four() {
        assert_eq!(weighted_median(&scenario_four()).unwrap(), d("20"));
    }

    #[test]
    fn weighted_median_is_order_independent() {
        let mut permuted = scenario_four();
        permuted.reverse();
        permuted.sort_by(|a, b| a.rate.cmp(&b.rate).then_with(|| a.voter.cmp(&b.voter)));
        assert_eq!(weighted_median(&permuted).unwrap(), weighted_median(&scenario_four()).unwrap());
    }

    #[test]
    fn single_voter_ballot_is_its_own_median_with_zero_stddev() {
        let ballot = sp_std::vec![vote("5", 1, 10)];
        assert_eq!(weighted_median(&ballot).unwrap(), d("5"));
        assert_eq!(standard_deviation(&ballot).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn standard_deviation_matches_scenario_four() {
        // sqrt((100 + 0 + 100) / 4) = sqrt(50)
        let sigma = standard_deviation(&scenario_four()).unwrap();
        assert_eq!(sigma, d("50").sqrt().unwrap());
    }

    #[test]
    fn abstain_is_excluded_from_median_and_stddev_but_not_from_weight() {
        let ballot = sp_std::vec![vote("0", 1, 1), vote("20", 2, 2), vote("30", 3, 1)];
        // Abstain's power still counts toward W (total 4, half 2): the walk
        // passes the abstain (cumulative 1) then lands on vote 2 (cumulative 3).
        assert_eq!(weighted_median(&ballot).unwrap(), d("20"));
        // Mean/variance only ever see the two positive votes.
        let all_positive = sp_std::vec![vote("20", 2, 2), vote("30", 3, 1)];
        assert_eq!(standard_deviation(&ballot).unwrap(), standard_deviation(&all_positive).unwrap());
    }

    #[test]
    fn all_abstain_ballot_has_no_median() {
        let ballot = sp_std::vec![vote("0", 1, 1), vote("0", 2, 1)];
        assert!(weighted_median(&ballot).is_err());
    }

    #[test]
    fn tally_all_qualify_within_wide_band() {
        // reward_band = 3 makes the band width (median * 1.5 = 30) dwarf
        // both the stddev and the full rate spread, so every vote qualifies.
        let outcome = tally(&scenario_four(), d("3"), 4, Decimal::ZERO).unwrap();
        assert_eq!(outcome.median, d("20"));
        assert_eq!(outcome.winners.len(), 3);
    }

    #[test]
    fn tally_narrow_band_excludes_outliers() {
        // reward_band = 0.4 on this ballot gives spread = max(20*0.2, sqrt(50))
        // = sqrt(50) ~= 7.07, a band of [12.93, 27.07] that only the median
        // vote itself (rate 20) falls inside.
        let outcome = tally(&scenario_four(), d("0.4"), 4, Decimal::ZERO).unwrap();
        assert_eq!(outcome.median, d("20"));
        assert_eq!(outcome.winners, sp_std::vec![(2u64, 2)]);
    }

    #[test]
    fn tally_drops_ballot_below_quorum() {
        // Participating power 4 out of a claimed 100 bonded, needing 50%.
        let err = tally(&scenario_four(), d("0.4"), 100, d("0.5"));
        assert!(matches!(err, Err(TallyError::QuorumNotMet)));
    }

    #[test]
    fn tally_empty_ballot_is_rejected() {
        let empty: Ballot<u64> = sp_std::vec![];
        assert!(matches!(tally(&empty, d("0.4"), 0, Decimal::ZERO), Err(TallyError::EmptyBallot)));
    }

    #[test]
    fn credit_winners_accumulates_across_denoms() {
        let mut claims = BTreeMap::new();
        credit_winners(&mut claims, &[(1u64, 10), (2, 5)]);
        credit_winners(&mut claims, &[(1u64, 10)]);
        assert_eq!(claims.get(&1).unwrap().weight, 20);
        assert_eq!(claims.get(&1).unwrap().denoms_voted, 2);
        assert_eq!(claims.get(&2).unwrap().weight, 5);
        assert_eq!(claims.get(&2).unwrap().denoms_voted, 1);
    }
}
