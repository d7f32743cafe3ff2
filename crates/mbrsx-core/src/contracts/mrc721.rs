use std::sync::Arc;

use alloy::primitives::{Address, U256};

use super::ContractClient;
use crate::abi::mrc721_abi;
use crate::codec::{address_arg, quantity_arg};
use crate::constants::MRC721;
use crate::errors::MbrsxResult;
use crate::provider::ConnectivityProvider;
use crate::Context;

/// Non-fungible token client, used for PYRO cores
#[derive(Clone, Debug)]
pub struct Mrc721 {
    client: ContractClient,
}

impl Mrc721 {
    pub fn new(
        address: Address,
        provider: Arc<dyn ConnectivityProvider>,
        ctx: Context,
    ) -> MbrsxResult<Self> {
        Ok(Self { client: ContractClient::new(MRC721, address, provider, mrc721_abi()?, ctx) })
    }

    pub fn address(&self) -> Address {
        self.client.address()
    }

    pub async fn balance_of(&self, owner: Address) -> MbrsxResult<U256> {
        self.client.read_uint("balanceOf(address)", vec![address_arg(&owner)]).await
    }

    pub async fn owner_of(&self, token_id: U256) -> MbrsxResult<Address> {
        self.client.read_address("ownerOf(uint256)", vec![quantity_arg(&token_id)]).await
    }
}
