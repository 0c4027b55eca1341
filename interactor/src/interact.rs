use std::path::Path;

use multiversx_sc_snippets::imports::*;
use prom_voting::prom_voting_proxy::PromVotingProxy;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::state::{State, STATE_FILE};

const CODE_PATH: &str = "mxsc:../output/prom-voting.mxsc.json";
const GAS_LIMIT: u64 = 30_000_000;

/// Drives one registry through a gateway, on behalf of a single wallet.
pub struct PromVotingInteract {
    interactor: Interactor,
    wallet_address: Address,
    contract_code: BytesValue,
    state: State,
}

impl PromVotingInteract {
    pub async fn new(config: &Config) -> Result<Self> {
        let mut interactor = Interactor::new(config.gateway_uri())
            .await
            .use_chain_simulator(config.use_chain_simulator());

        interactor.set_current_dir_from_workspace("interactor");
        let wallet_address = interactor.register_wallet(test_wallets::alice()).await;
        debug!(gateway = config.gateway_uri(), "registered wallet");

        let contract_code = BytesValue::interpret_from(CODE_PATH, &InterpreterContext::default());

        Ok(PromVotingInteract {
            interactor,
            wallet_address,
            contract_code,
            state: State::load(Path::new(STATE_FILE))?,
        })
    }

    pub async fn deploy(&mut self) -> Result<()> {
        let new_address = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .gas(GAS_LIMIT)
            .typed(PromVotingProxy)
            .init()
            .code(&self.contract_code)
            .returns(ReturnsNewBech32Address)
            .run()
            .await;

        info!("PromVoting deployed to: {new_address}");
        self.state.set_address(new_address.to_bech32_string());
        self.state.save(Path::new(STATE_FILE))
    }

    pub async fn add_candidate(&mut self, name: &str) -> Result<()> {
        let address = self.current_address()?;

        self.interactor
            .tx()
            .from(&self.wallet_address)
            .to(&address)
            .gas(GAS_LIMIT)
            .typed(PromVotingProxy)
            .add_candidate(name)
            .run()
            .await;

        info!(candidate = name, "candidate added");
        Ok(())
    }

    pub async fn vote(&mut self) -> Result<()> {
        let address = self.current_address()?;

        let name = self
            .interactor
            .tx()
            .from(&self.wallet_address)
            .to(&address)
            .gas(GAS_LIMIT)
            .typed(PromVotingProxy)
            .vote()
            .returns(ReturnsResult)
            .run()
            .await;

        info!(candidate = %buffer_to_string(&name), "vote cast");
        Ok(())
    }

    pub async fn candidate(&mut self) -> Result<()> {
        let address = self.current_address()?;

        let candidate = self
            .interactor
            .query()
            .to(&address)
            .typed(PromVotingProxy)
            .candidate()
            .returns(ReturnsResult)
            .run()
            .await;

        info!(
            name = %buffer_to_string(&candidate.name),
            vote_count = candidate.vote_count,
            "candidate"
        );
        Ok(())
    }

    pub async fn vote_count(&mut self) -> Result<()> {
        let address = self.current_address()?;

        let vote_count = self
            .interactor
            .query()
            .to(&address)
            .typed(PromVotingProxy)
            .get_vote_count()
            .returns(ReturnsResultUnmanaged)
            .run()
            .await;

        info!(vote_count, "vote count");
        Ok(())
    }

    fn current_address(&self) -> Result<Bech32Address> {
        let address = self.state.current_address()?;
        Ok(Bech32Address::from_bech32_string(address.to_string()))
    }
}

fn buffer_to_string(buffer: &ManagedBuffer<StaticApi>) -> String {
    String::from_utf8_lossy(buffer.to_boxed_bytes().as_slice()).into_owned()
}
