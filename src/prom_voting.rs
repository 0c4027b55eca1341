#![no_std]

#[allow(unused_imports)]
use multiversx_sc::imports::*;
use multiversx_sc::derive_imports::*;

pub mod errors;
pub mod prom_voting_proxy;

use errors::{ERR_ALREADY_EXISTS, ERR_EMPTY_NAME, ERR_NO_CANDIDATE};

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Candidate<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub vote_count: u64,
}

/// A registry holding at most one candidate and counting the votes cast for it.
///
/// Every deployment is its own registry. The VM applies calls to one instance
/// one at a time, and a failed call reverts without touching storage.
#[multiversx_sc::contract]
pub trait PromVoting {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Registers the candidate. A registry accepts exactly one candidate for
    /// its whole lifetime; later calls are rejected.
    #[endpoint(addCandidate)]
    fn add_candidate(&self, name: ManagedBuffer) {
        require!(!name.is_empty(), ERR_EMPTY_NAME);
        require!(self.candidate_record().is_empty(), ERR_ALREADY_EXISTS);

        self.candidate_record().set(Candidate {
            name: name.clone(),
            vote_count: 0,
        });
        self.candidate_added_event(&name);
    }

    /// Records one vote and emits `voteCast`. Returns the name carried by the event.
    #[endpoint]
    fn vote(&self) -> ManagedBuffer {
        require!(!self.candidate_record().is_empty(), ERR_NO_CANDIDATE);

        let name = self.candidate_record().update(|candidate| {
            candidate.vote_count += 1;
            candidate.name.clone()
        });
        self.vote_cast_event(&name);

        name
    }

    #[view]
    fn candidate(&self) -> Candidate<Self::Api> {
        self.require_candidate()
    }

    #[view(getVoteCount)]
    fn get_vote_count(&self) -> u64 {
        self.require_candidate().vote_count
    }

    #[view(hasCandidate)]
    fn has_candidate(&self) -> bool {
        !self.candidate_record().is_empty()
    }

    fn require_candidate(&self) -> Candidate<Self::Api> {
        require!(!self.candidate_record().is_empty(), ERR_NO_CANDIDATE);
        self.candidate_record().get()
    }

    #[event("voteCast")]
    fn vote_cast_event(&self, #[indexed] candidate: &ManagedBuffer);

    #[event("candidateAdded")]
    fn candidate_added_event(&self, #[indexed] candidate: &ManagedBuffer);

    #[storage_mapper("candidate")]
    fn candidate_record(&self) -> SingleValueMapper<Candidate<Self::Api>>;
}
