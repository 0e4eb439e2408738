//! In-place storage migrations, mirroring the upstream keeper's `Migrator`
//! (`x/oracle/keeper/migrations.go`): each migration bumps the on-chain
//! storage version by one and adjusts `Params` to match whatever that
//! version's layout assumes.

use crate::{Config, Pallet};
use frame_support::pallet_prelude::{StorageVersion, Weight};
use frame_support::traits::GetStorageVersion;

/// Unversioned -> v1: collapse every stamp period and stamp count to 1,
/// the same "every block, one stamp" baseline `Migrate1to2` re-establishes
/// on the Go side when the historic store's experimental flag first turns
/// on. A no-op once the chain is already at v1 or later.
pub mod v1 {
    use super::*;

    pub fn migrate<T: Config>() -> Weight {
        let on_chain = Pallet::<T>::on_chain_storage_version();
        if on_chain >= StorageVersion::new(1) {
            return Weight::zero();
        }

        crate::Params::<T>::mutate(|params| {
            params.historic_stamp_period = 1;
            params.median_stamp_period = 1;
            params.maximum_price_stamps = 1;
            params.maximum_median_stamps = 1;
        });
        StorageVersion::new(1).put::<Pallet<T>>();

        T::DbWeight::get().reads_writes(1, 2)
    }
}
