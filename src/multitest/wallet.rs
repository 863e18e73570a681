use std::cell::{Cell, Ref, RefCell, RefMut};
use std::collections::HashMap;

use anyhow::anyhow;
use cosmwasm_std::{Addr, CosmosMsg, WasmMsg};
use cw_multi_test::{next_block, App, Executor};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::chain::{ChainReader, Confirmation, TxHash, WalletProvider};

/// Wallet provider backed by an in-process multi-test chain.
///
/// Submitted transactions are queued and only executed by `confirm`, so reverts surface
/// at confirmation time like on a real network.
pub struct MultiTestWallet {
    app: RefCell<App>,
    account: Addr,
    pending: RefCell<HashMap<TxHash, (Addr, WasmMsg)>>,
    submitted: RefCell<Vec<WasmMsg>>,
    failing_contracts: RefCell<Vec<Addr>>,
    failing_after_confirm: RefCell<Vec<Addr>>,
    tx_count: Cell<u64>,
    prompts: Cell<u32>,
    queries: Cell<u32>,
    pub refuse_authorization: Cell<bool>,
    pub reject_submissions: Cell<bool>,
    pub stall_confirmations: Cell<bool>,
    pub slow_authorization: Cell<bool>,
}

impl MultiTestWallet {
    pub fn new(app: App, account: &str) -> Self {
        MultiTestWallet {
            app: RefCell::new(app),
            account: Addr::unchecked(account),
            pending: RefCell::new(HashMap::new()),
            submitted: RefCell::new(vec![]),
            failing_contracts: RefCell::new(vec![]),
            failing_after_confirm: RefCell::new(vec![]),
            tx_count: Cell::new(0),
            prompts: Cell::new(0),
            queries: Cell::new(0),
            refuse_authorization: Cell::new(false),
            reject_submissions: Cell::new(false),
            stall_confirmations: Cell::new(false),
            slow_authorization: Cell::new(false),
        }
    }

    pub fn app(&self) -> Ref<'_, App> {
        self.app.borrow()
    }

    pub fn app_mut(&self) -> RefMut<'_, App> {
        self.app.borrow_mut()
    }

    /// Number of times the user was asked to authorize the site.
    pub fn prompts(&self) -> u32 {
        self.prompts.get()
    }

    pub fn queries(&self) -> u32 {
        self.queries.get()
    }

    pub fn reset_queries(&self) {
        self.queries.set(0);
    }

    /// Every message handed to `submit`, accepted or not.
    pub fn submitted(&self) -> Vec<WasmMsg> {
        self.submitted.borrow().clone()
    }

    /// Makes every query against `contracts` fail until called again.
    pub fn fail_queries_to(&self, contracts: &[&Addr]) {
        *self.failing_contracts.borrow_mut() =
            contracts.iter().map(|addr| (*addr).clone()).collect();
    }

    /// Like `fail_queries_to`, but only from the next executed transaction on.
    pub fn fail_queries_after_confirm(&self, contracts: &[&Addr]) {
        *self.failing_after_confirm.borrow_mut() =
            contracts.iter().map(|addr| (*addr).clone()).collect();
    }
}

impl ChainReader for MultiTestWallet {
    async fn chain_id(&self) -> anyhow::Result<String> {
        Ok(self.app.borrow().block_info().chain_id)
    }

    async fn query_wasm_smart<T, M>(&self, contract: &Addr, msg: &M) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
        M: Serialize,
    {
        self.queries.set(self.queries.get() + 1);
        if self.failing_contracts.borrow().contains(contract) {
            return Err(anyhow!("rpc error: query to {} timed out", contract));
        }
        let response = self
            .app
            .borrow()
            .wrap()
            .query_wasm_smart(contract.to_string(), msg)?;
        Ok(response)
    }
}

impl WalletProvider for MultiTestWallet {
    async fn request_account(&self) -> anyhow::Result<Addr> {
        self.prompts.set(self.prompts.get() + 1);
        if self.slow_authorization.get() {
            tokio::task::yield_now().await;
        }
        if self.refuse_authorization.get() {
            return Err(anyhow!("user rejected the request"));
        }
        Ok(self.account.clone())
    }

    async fn submit(&self, sender: &Addr, msg: WasmMsg) -> anyhow::Result<TxHash> {
        self.submitted.borrow_mut().push(msg.clone());
        if self.reject_submissions.get() {
            return Err(anyhow!("user denied transaction signature"));
        }
        let count = self.tx_count.get() + 1;
        self.tx_count.set(count);
        let tx_hash = TxHash(format!("tx-{}", count));
        self.pending
            .borrow_mut()
            .insert(tx_hash.clone(), (sender.clone(), msg));
        Ok(tx_hash)
    }

    async fn confirm(&self, tx_hash: &TxHash) -> anyhow::Result<Confirmation> {
        if self.stall_confirmations.get() {
            std::future::pending::<()>().await;
        }
        let (sender, msg) = self
            .pending
            .borrow_mut()
            .remove(tx_hash)
            .ok_or_else(|| anyhow!("unknown transaction {}", tx_hash))?;

        let mut app = self.app.borrow_mut();
        app.execute(sender, CosmosMsg::Wasm(msg))?;
        app.update_block(next_block);
        let failing = self.failing_after_confirm.take();
        if !failing.is_empty() {
            *self.failing_contracts.borrow_mut() = failing;
        }
        Ok(Confirmation {
            tx_hash: tx_hash.clone(),
            height: app.block_info().height,
        })
    }
}
