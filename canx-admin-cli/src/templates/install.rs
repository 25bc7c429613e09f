//! Static auth and dashboard scaffolding templates
//!
//! These are emitted verbatim; no placeholders, no rendering pass.

/// Login view
pub const LOGIN_VIEW: &str = r#"import { jsx } from 'canxjs';
export function Login({ error }: { error?: string }) {
  return (
    <div class="bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950 text-white min-h-screen flex items-center justify-center">
      <div class="w-full max-w-md p-8">
        <div class="glass rounded-2xl p-8">
          <div class="text-center mb-8">
            <div class="w-16 h-16 bg-gradient-to-br from-emerald-500 to-cyan-500 rounded-2xl flex items-center justify-center text-3xl font-bold mx-auto mb-4">C</div>
            <h1 class="text-2xl font-bold text-gradient">Welcome Back</h1>
          </div>
          {error && <div class="bg-red-500/10 border border-red-500/30 text-red-400 px-4 py-3 rounded-xl mb-6">{error}</div>}
          <form method="POST" action="/login" class="space-y-6">
            <div><label class="block text-sm font-medium text-slate-300 mb-2">Email</label><input type="email" name="email" required class="w-full px-4 py-3 bg-slate-800/50 border border-slate-700 rounded-xl text-white" /></div>
            <div><label class="block text-sm font-medium text-slate-300 mb-2">Password</label><input type="password" name="password" required class="w-full px-4 py-3 bg-slate-800/50 border border-slate-700 rounded-xl text-white" /></div>
            <button type="submit" class="w-full py-3 bg-gradient-to-r from-emerald-500 to-cyan-500 text-white font-semibold rounded-xl">Sign In</button>
          </form>
          <p class="text-center text-slate-400 mt-6">Don't have an account? <a href="/register" class="text-emerald-400">Register</a></p>
        </div>
      </div>
    </div>
  );
}"#;

/// Register view
pub const REGISTER_VIEW: &str = r#"import { jsx } from 'canxjs';
export function Register({ error }: { error?: string }) {
  return (
    <div class="bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950 text-white min-h-screen flex items-center justify-center">
      <div class="w-full max-w-md p-8">
        <div class="glass rounded-2xl p-8">
          <div class="text-center mb-8">
            <div class="w-16 h-16 bg-gradient-to-br from-emerald-500 to-cyan-500 rounded-2xl flex items-center justify-center text-3xl font-bold mx-auto mb-4">C</div>
            <h1 class="text-2xl font-bold text-gradient">Create Account</h1>
          </div>
          {error && <div class="bg-red-500/10 border border-red-500/30 text-red-400 px-4 py-3 rounded-xl mb-6">{error}</div>}
          <form method="POST" action="/register" class="space-y-6">
            <div><label class="block text-sm font-medium text-slate-300 mb-2">Name</label><input type="text" name="name" required class="w-full px-4 py-3 bg-slate-800/50 border border-slate-700 rounded-xl text-white" /></div>
            <div><label class="block text-sm font-medium text-slate-300 mb-2">Email</label><input type="email" name="email" required class="w-full px-4 py-3 bg-slate-800/50 border border-slate-700 rounded-xl text-white" /></div>
            <div><label class="block text-sm font-medium text-slate-300 mb-2">Password</label><input type="password" name="password" required class="w-full px-4 py-3 bg-slate-800/50 border border-slate-700 rounded-xl text-white" /></div>
            <button type="submit" class="w-full py-3 bg-gradient-to-r from-emerald-500 to-cyan-500 text-white font-semibold rounded-xl">Create Account</button>
          </form>
          <p class="text-center text-slate-400 mt-6">Already have an account? <a href="/login" class="text-emerald-400">Sign In</a></p>
        </div>
      </div>
    </div>
  );
}"#;

/// Post-login dashboard view
pub const DASHBOARD_VIEW: &str = r#"import { jsx } from 'canxjs';
export function Dashboard({ user }: { user?: { name: string } }) {
  return (
    <div class="bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950 text-white min-h-screen">
      <header class="border-b border-slate-800 bg-slate-900/50 backdrop-blur">
        <div class="max-w-7xl mx-auto px-4 py-4 flex items-center justify-between">
          <div class="flex items-center gap-3"><div class="w-10 h-10 bg-gradient-to-br from-emerald-500 to-cyan-500 rounded-xl flex items-center justify-center text-xl font-bold">C</div><span class="text-xl font-bold text-gradient">CanxJS</span></div>
          <nav class="flex items-center gap-4"><span class="text-slate-400">{user?.name || 'Guest'}</span><a href="/logout" class="text-slate-300 hover:text-white">Logout</a></nav>
        </div>
      </header>
      <main class="max-w-7xl mx-auto px-4 py-8">
        <h1 class="text-3xl font-bold mb-8">Dashboard</h1>
        <div class="grid gap-6 md:grid-cols-3">
          <div class="glass rounded-xl p-6"><h3 class="text-slate-400 mb-2">Total Users</h3><p class="text-3xl font-bold">1,234</p></div>
          <div class="glass rounded-xl p-6"><h3 class="text-slate-400 mb-2">Revenue</h3><p class="text-3xl font-bold">$45,678</p></div>
          <div class="glass rounded-xl p-6"><h3 class="text-slate-400 mb-2">Active Sessions</h3><p class="text-3xl font-bold">573</p></div>
        </div>
        <div class="glass rounded-xl p-6 mt-8"><h2 class="text-xl font-bold mb-4">Welcome!</h2><p class="text-slate-400">You're logged in. Start building with CanxJS.</p></div>
      </main>
    </div>
  );
}"#;

/// Auth controller with decorator-routed login/register/logout handlers
pub const AUTH_CONTROLLER: &str = r#"import { BaseController, Controller, Get, Post, renderPage } from 'canxjs';
import type { CanxRequest, CanxResponse } from 'canxjs';
import { Login } from '../views/auth/Login';
import { Register } from '../views/auth/Register';

@Controller('/')
export class AuthController extends BaseController {
  @Get('/login')
  showLogin(req: CanxRequest, res: CanxResponse) { return res.html(renderPage(Login({}), { title: 'Login' })); }

  @Post('/login')
  async handleLogin(req: CanxRequest, res: CanxResponse) { return res.redirect('/dashboard'); }

  @Get('/register')
  showRegister(req: CanxRequest, res: CanxResponse) { return res.html(renderPage(Register({}), { title: 'Register' })); }

  @Post('/register')
  async handleRegister(req: CanxRequest, res: CanxResponse) { return res.redirect('/login'); }

  @Get('/logout')
  logout(req: CanxRequest, res: CanxResponse) { return res.redirect('/'); }
}"#;

/// Dashboard controller serving the post-login landing page
pub const DASHBOARD_CONTROLLER: &str = r#"import { BaseController, Controller, Get, renderPage } from 'canxjs';
import type { CanxRequest, CanxResponse } from 'canxjs';
import { Dashboard } from '../views/Dashboard';

@Controller('/')
export class DashboardController extends BaseController {
  @Get('/dashboard')
  index(req: CanxRequest, res: CanxResponse) {
    return res.html(renderPage(Dashboard({ user: { name: 'User' } }), { title: 'Dashboard' }));
  }
}"#;

/// Admin dashboard view emitted by `make:dashboard`
pub const ADMIN_DASHBOARD: &str = r#"import React from "react";
import { Card, CardHeader, CardTitle, CardContent } from "canx-ui";
import { Layout } from "@/resources/views/layouts/admin";

export default function Dashboard() {
  return (
    <Layout title="Dashboard">
      <div className="space-y-6">
        <h1 className="text-3xl font-bold tracking-tight">Dashboard</h1>

        <div className="grid gap-6 md:grid-cols-3">
          <Card>
            <CardHeader>
              <CardTitle>Total Users</CardTitle>
            </CardHeader>
            <CardContent>
              <p className="text-3xl font-bold">0</p>
            </CardContent>
          </Card>
          <Card>
            <CardHeader>
              <CardTitle>Revenue</CardTitle>
            </CardHeader>
            <CardContent>
              <p className="text-3xl font-bold">$0</p>
            </CardContent>
          </Card>
          <Card>
            <CardHeader>
              <CardTitle>Active Sessions</CardTitle>
            </CardHeader>
            <CardContent>
              <p className="text-3xl font-bold">0</p>
            </CardContent>
          </Card>
        </div>

        <Card>
          <CardHeader>
            <CardTitle>Welcome</CardTitle>
          </CardHeader>
          <CardContent>
            <p className="text-sm text-gray-500">
              Manage your resources from the sidebar, or scaffold a new one with canx-admin make:admin.
            </p>
          </CardContent>
        </Card>
      </div>
    </Layout>
  );
}
"#;
