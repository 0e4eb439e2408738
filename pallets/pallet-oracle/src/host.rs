//! The host collaborator contract (spec §6), realized as a single
//! capability record rather than a family of traits: one associated type on
//! `Config` bundles every non-FRAME-native thing the pallet needs from its
//! surrounding chain (bonded validator power, slashing, jailing, reward
//! distribution, governance parameters). `BlockHeight` and `Store` are
//! ordinary FRAME concepts and need no capability record of their own.

use sp_staking::offence::{Kind, Offence};
use sp_std::vec::Vec;

/// Everything the pallet needs from the chain it's embedded in, beyond what
/// `frame_system::Config` already supplies. Governance parameters are not
/// part of this record: they live directly in the pallet's own `Params`
/// storage, set by its own root-gated calls.
pub trait OracleHost<AccountId, BlockNumber> {
    /// The bonded validator set, ordered by descending power, each paired
    /// with its voting power already reduced to the oracle's native scale.
    fn bonded_validators_by_power() -> Vec<(AccountId, u64)>;

    /// The divisor used to convert a validator's staked balance into the
    /// `u64` voting power used throughout the ballot engine.
    fn power_reduction() -> u128;

    /// Reports a validator for chronic vote misses at the current slash
    /// window boundary. A no-op for validators outside the active set.
    fn slash_and_jail(validator: &AccountId, slash_fraction_percent: u32);

    /// Distributes the period's oracle reward pool to the given winners,
    /// weighted by their accumulated claim weight.
    fn reward_distribute(winners: &[(AccountId, u64)]);
}

/// The slashable offence reported for a validator who missed more votes
/// than `min_valid_per_window` allows inside a single slash window.
///
/// Reported through `pallet_offences`/`ReportOffence` rather than calling
/// into `pallet_staking` directly — the same mechanism `pallet_grandpa` and
/// `pallet_babe` use to report equivocations, and already wired as
/// `pallet_staking`'s `OnOffenceHandler` in this chain's runtime. Besides
/// slashing by `slash_fraction`, the disabling strategy this triggers is
/// what plays the role of "jail" here: the validator drops out of the
/// active set for the remainder of the era.
pub struct OracleMissOffence<AccountId> {
    pub session_index: sp_staking::SessionIndex,
    pub validator_set_count: u32,
    pub offender: AccountId,
    pub slash_fraction: sp_runtime::Perbill,
}

impl<AccountId: Clone> Offence<AccountId> for OracleMissOffence<AccountId> {
    const ID: Kind = *b"oracle:miss-vote";
    type TimeSlot = sp_staking::SessionIndex;

    fn offenders(&self) -> Vec<AccountId> {
        sp_std::vec![self.offender.clone()]
    }

    fn session_index(&self) -> sp_staking::SessionIndex {
        self.session_index
    }

    fn validator_set_count(&self) -> u32 {
        self.validator_set_count
    }

    fn time_slot(&self) -> Self::TimeSlot {
        self.session_index
    }

    fn slash_fraction(&self, _offenders_count: u32) -> sp_runtime::Perbill {
        self.slash_fraction
    }
}
